mod analysis;
mod form;

pub use analysis::{
    AnalysisResult, SubmissionOutcome, CONNECTION_ERROR_PREFIX, FALLBACK_CATEGORY,
    FALLBACK_REPLY, UNKNOWN_ERROR,
};
pub use form::{guess_mime, FilePart, FormField, FormPayload};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a JSON value the way the service's web page would print it.
///
/// Falsy values (`null`, `false`, `0`, `""`) count as absent, so they fall
/// through to whatever placeholder the caller shows.
pub(crate) fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Helper to deserialize an optional text field that the backend may send
/// as a string, number, or null.
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(display_text))
}

/// Helper to deserialize a list of strings, dropping entries that are not
/// printable and treating a non-array as empty.
pub(crate) fn deserialize_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.iter().filter_map(display_text).collect(),
        _ => Vec::new(),
    })
}
