//! Shared deserialization helpers for inbound HTTP payloads.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field that must be a JSON string, treating anything else
/// (absent, null, or a non-string value) as `None`.
///
/// The required-field validation then reports such fields as missing, and
/// the partial-update policy leaves them unchanged, instead of rejecting
/// the whole body on a type mismatch.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
