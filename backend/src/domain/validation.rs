//! Required-field checks for incoming payloads.
//!
//! Side-effect-free. Each check appends one human-readable message per
//! failing field, preserving the order in which fields are declared for
//! checking; callers surface the collected list as a 400 response.

/// Validate a required string field.
///
/// A field passes when it is present and not empty or whitespace-only once
/// trimmed. On failure a `"<field> is required"` message is appended and
/// `None` is returned.
pub(crate) fn required_string(
    value: Option<String>,
    field: &str,
    messages: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => {
            messages.push(format!("{field} is required"));
            None
        }
    }
}
