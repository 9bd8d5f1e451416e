//! JSON and timestamp conversion for SQLite columns
//!
//! Payloads are stored as serialized JSON text; timestamps are stored as
//! RFC 3339 text so that date values stay human-readable and stable across
//! round trips.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Serialize a payload to its stored text form
pub fn serialize_payload<T: Serialize>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(payload)
}

/// Decode a stored payload back into a JSON value
pub fn deserialize_payload(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

/// Format a timestamp for the `time` column
pub fn time_to_sql(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Parse a `time` column value back into a UTC timestamp
pub fn sql_to_time(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc))
}
