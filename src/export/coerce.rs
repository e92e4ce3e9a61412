// src/export/coerce.rs
// Tolerant coercion of raw string parameters into typed values.
// Parse failure is a normal outcome here, never an error.

use serde_json::Value;
use tracing::debug;

/// Parse a raw parameter as a JSON array of values.
///
/// Absent, empty, non-JSON, and non-array input all coerce to an empty
/// vec.
pub fn parse_json_array(raw: Option<&str>) -> Vec<Value> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            debug!("expected a JSON array, got {}", type_name(&other));
            Vec::new()
        }
        Err(_) => {
            debug!("input is not valid JSON, coercing to empty array");
            Vec::new()
        }
    }
}

/// Result of attempting to interpret a raw string as JSON: either the
/// parsed value or the original string.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

/// Parse-or-fallback: try the raw string as JSON, degrade to the
/// original string on failure.
///
/// Returns `None` for an absent parameter, and also for a payload that
/// parses to JSON null — a bare `null` carries nothing to emit.
pub fn json_or_text(raw: Option<&str>) -> Option<Payload> {
    let raw = raw?;
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Null) => None,
        Ok(value) => Some(Payload::Json(value)),
        Err(_) => {
            debug!("payload is not valid JSON, keeping it as plain text");
            Some(Payload::Text(raw.to_string()))
        }
    }
}

impl Payload {
    /// Object and array payloads render as structured artifacts;
    /// everything else renders as text.
    pub fn is_composite(&self) -> bool {
        matches!(self, Payload::Json(Value::Object(_) | Value::Array(_)))
    }

    /// Plain-string form of a non-composite payload. JSON strings
    /// render bare, other scalars via their JSON notation.
    pub fn string_form(&self) -> String {
        match self {
            Payload::Text(s) => s.clone(),
            Payload::Json(Value::String(s)) => s.clone(),
            Payload::Json(v) => v.to_string(),
        }
    }

    /// The value to serialize when materializing this payload as a
    /// JSON file: composites as-is, scalars wrapped as
    /// `{"value": <string form>}`.
    pub fn file_value(&self) -> Value {
        match self {
            Payload::Json(v) if self.is_composite() => v.clone(),
            _ => serde_json::json!({ "value": self.string_form() }),
        }
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A string-valued, non-empty field of a JSON object, if it has one.
pub(crate) fn non_empty_str<'a>(obj: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}
