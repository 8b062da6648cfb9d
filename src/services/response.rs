//! Model output handling — fence stripping, JSON decoding, shape validation.
//!
//! Backends sometimes wrap JSON in markdown fences even when told not to, so
//! fences are always stripped before decoding. Anything that is not an object
//! carrying every required field for the kind is a hard parse error.

use crate::component::{ComponentContent, ComponentKind};

use super::generation::GenerationError;

/// Max characters of raw model output carried in a parse error.
pub const SNIPPET_CHARS: usize = 200;

/// Remove a leading ```` ```lang ```` line and a trailing ```` ``` ````, if present.
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = match rest.find('\n') {
            Some(i) if rest[..i].trim().chars().all(|c| c.is_ascii_alphanumeric()) => &rest[i + 1..],
            _ => rest,
        };
    }
    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

/// First [`SNIPPET_CHARS`] characters of `raw`, on a char boundary.
#[must_use]
pub fn snippet(raw: &str) -> String {
    raw.chars().take(SNIPPET_CHARS).collect()
}

/// Decode raw model output into content for `kind`.
///
/// # Errors
///
/// Returns [`GenerationError::Parse`] when the text is not JSON, is not an
/// object, or is missing required fields.
pub fn parse_content(kind: ComponentKind, raw: &str) -> Result<ComponentContent, GenerationError> {
    let parse_error = |reason: String| GenerationError::Parse { kind, reason, snippet: snippet(raw) };

    let body = strip_code_fences(raw);
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| parse_error(e.to_string()))?;
    if !value.is_object() {
        return Err(parse_error(format!("expected a JSON object, got {}", json_type_name(&value))));
    }
    ComponentContent::from_value(kind, value).map_err(|e| parse_error(e.to_string()))
}

/// Normalize a model-suggested image search phrase. `None` when nothing
/// usable remains.
#[must_use]
pub fn parse_search_phrase(raw: &str) -> Option<String> {
    let line = strip_code_fences(raw).lines().find(|l| !l.trim().is_empty())?;
    let cleaned: String = line
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '\'' { c } else { ' ' })
        .collect();
    let phrase = cleaned.split_whitespace().take(8).collect::<Vec<_>>().join(" ");
    if phrase.is_empty() { None } else { Some(phrase) }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;
