//! Forgiving field decoders for backend payloads.
//!
//! The backend is not strict about JSON types: numbers sometimes arrive as
//! strings and dates sometimes carry a time component. These helpers are
//! plugged in with `#[serde(deserialize_with = ...)]`.

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Decode a number that may be encoded as a JSON number or a numeric string.
///
/// Missing, `null` and blank values decode as `0.0`.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("number out of range: {}", n))),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| de::Error::custom(format!("not a number: {:?}", s)))
        }
        Some(other) => Err(de::Error::custom(format!("expected a number, got {}", other))),
    }
}

/// Decode an optional label, treating `null` as an empty string.
pub fn label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a calendar date from `YYYY-MM-DD` or an ISO datetime.
pub fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| de::Error::custom(format!("not a calendar date: {:?}", raw)))
}

/// Parse the leading `YYYY-MM-DD` portion of a date or datetime string.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
