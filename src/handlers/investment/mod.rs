mod detail;
mod summary_history;

pub use detail::{detail, user_detail};
pub use summary_history::summary_history;

use serde_json::Value;

/// Decode an inbound event body. The body is either a raw JSON mapping or a
/// JSON-encoded string carrying the mapping; an empty body behaves like an
/// absent one.
pub(crate) fn parse_event_body(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    if bytes.is_empty() {
        return Ok(Value::Null);
    }

    let value: Value = serde_json::from_slice(bytes)?;
    match value {
        Value::String(inner) => serde_json::from_str(&inner),
        other => Ok(other),
    }
}

/// Asset-type selector from the event body: read case-insensitively and
/// upper-cased, defaulting to CASH when absent or empty.
pub(crate) fn asset_type_from(body: &Value) -> String {
    body.get("assetType")
        .and_then(Value::as_str)
        .filter(|selector| !selector.is_empty())
        .map(|selector| selector.to_uppercase())
        .unwrap_or_else(|| "CASH".to_string())
}

/// User identifier from the event body; an empty string counts as absent.
pub(crate) fn username_from(body: &Value) -> Option<String> {
    body.get("username")
        .and_then(Value::as_str)
        .filter(|username| !username.is_empty())
        .map(str::to_string)
}
