//! Lenient readers for the display fields of persisted records.
//!
//! Stored data may come from older builds or hand edits; a wrong JSON type
//! in a display field must not make the whole list unreadable.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a string, number, or bool as text; anything else as empty.
pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(value_to_text).unwrap_or_default())
}

/// Like [`text`], mapping `null` and empty strings to `None`.
pub(crate) fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(value_to_text).filter(|s| !s.is_empty()))
}

/// Reads an epoch-milliseconds timestamp from an integer, float, or string.
pub(crate) fn timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.to_string().split('.').next()?.parse().ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
