//! Lenient coercion utilities
//!
//! Order data comes from an external, occasionally inconsistent source.
//! Malformed amounts degrade to 0 and malformed timestamps degrade to the
//! caller's fallback instant; neither is ever reported as an error. Every
//! consumer of raw backend numbers/dates goes through these two functions.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON value into a monetary amount.
///
/// Numbers pass through (non-finite values become 0), numeric strings are
/// parsed, everything else (null, missing, objects, garbage text) is 0.
pub fn coerce_amount(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Coerce a raw timestamp string into a UTC instant.
///
/// Accepts RFC 3339 (with offset) and bare `YYYY-MM-DDTHH:MM:SS[.fff]`
/// strings, which are read as UTC. Anything unparseable, including a missing
/// value, yields `fallback`.
pub fn coerce_timestamp(raw: Option<&str>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    let Some(s) = raw else {
        return fallback;
    };
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()))
        .unwrap_or(fallback)
}

/// Serde adapter applying [`coerce_amount`] during deserialization.
///
/// Used with `#[serde(default, deserialize_with = "...")]` so a missing
/// field also lands on 0.
pub fn de_lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value))
}
