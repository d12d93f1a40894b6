use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::lenient;

// ---------------------------------------------------------------------------
// LogId — Server-assigned record identifier
// ---------------------------------------------------------------------------

/// Opaque record identifier. The backend may use integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogId {
    Number(i64),
    Text(String),
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogId::Number(n) => write!(f, "{}", n),
            LogId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for LogId {
    fn from(n: i64) -> Self {
        LogId::Number(n)
    }
}

impl From<&str> for LogId {
    fn from(s: &str) -> Self {
        LogId::Text(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// FuelType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FuelType {
    #[default]
    #[serde(rename = "gasolina", alias = "gasoline")]
    Gasoline,
    #[serde(rename = "etanol", alias = "ethanol")]
    Ethanol,
}

impl FuelType {
    /// Wire value understood by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasolina",
            FuelType::Ethanol => "etanol",
        }
    }

    /// Human label used by the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "Gasolina",
            FuelType::Ethanol => "Etanol",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LogRecord — One fuel purchase as stored by the backend
// ---------------------------------------------------------------------------

/// A fuel purchase. The backend is authoritative for `total`; it is not
/// recomputed from `liters` and `price_per_liter` here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub id: LogId,
    #[serde(rename = "type")]
    pub fuel_type: FuelType,
    #[serde(default, deserialize_with = "lenient::number")]
    pub liters: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_per_liter: f64,
    #[serde(deserialize_with = "lenient::date")]
    pub date: NaiveDate,
}

// ---------------------------------------------------------------------------
// CreateLogRequest — Body of `POST /fuel-logs`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogRequest {
    #[serde(rename = "type")]
    pub fuel_type: FuelType,
    pub liters: f64,
    pub price_per_liter: f64,
    pub date: NaiveDate,
}
