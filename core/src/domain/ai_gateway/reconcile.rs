use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::domain::ai_gateway::payloads::AiPayload;

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z]*").expect("fence pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("completion contains no JSON object")]
    NoJsonObject,

    #[error("completion JSON does not match the expected shape: {0}")]
    Malformed(String),
}

/// Drops a leading fence marker (with an optional language tag) and a trailing
/// fence. Fences quoted inside string values are left alone.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let text = LEADING_FENCE.find(text).map_or(text, |fence| &text[fence.end()..]);
    text.strip_suffix("```").unwrap_or(text).trim()
}

/// The slice from the first `{` through the last `}`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Turns a raw completion into `P`.
///
/// List fields named by `P::LIST_FIELDS` that are absent or `null` are read as
/// empty lists. Everything else must already have the right shape.
pub fn decode<P: AiPayload>(raw: &str) -> Result<P, ReconcileError> {
    let candidate = extract_json_object(strip_code_fence(raw)).ok_or(ReconcileError::NoJsonObject)?;

    let mut value: Value =
        serde_json::from_str(candidate).map_err(|e| ReconcileError::Malformed(e.to_string()))?;

    let object = value
        .as_object_mut()
        .ok_or_else(|| ReconcileError::Malformed("top level is not an object".to_string()))?;
    for field in P::LIST_FIELDS {
        match object.get(*field) {
            None | Some(Value::Null) => {
                object.insert((*field).to_string(), Value::Array(Vec::new()));
            }
            Some(_) => {}
        }
    }

    serde_json::from_value(value).map_err(|e| ReconcileError::Malformed(e.to_string()))
}

/// Free-text completion split into trimmed, non-empty lines.
pub fn non_empty_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
