use serde::{Deserialize, Serialize};

use super::lenient;
use crate::config;

// ---------------------------------------------------------------------------
// StatsSnapshot — Aggregate figures for the current period
// ---------------------------------------------------------------------------

/// Aggregates computed by the backend for the current month.
///
/// A snapshot is never edited; each refresh replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_spent: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_liters: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_price: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub projected_total: f64,
    #[serde(rename = "monthName", default, deserialize_with = "lenient::label")]
    pub period_label: String,
}

impl StatsSnapshot {
    /// The zeroed snapshot shown before the first successful refresh.
    pub fn placeholder() -> Self {
        Self {
            total_spent: 0.0,
            total_liters: 0.0,
            avg_price: 0.0,
            projected_total: 0.0,
            period_label: config::PLACEHOLDER_PERIOD_LABEL.to_string(),
        }
    }
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        Self::placeholder()
    }
}
