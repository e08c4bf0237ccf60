//! Shape-checked accessors over the untyped document tree.
//!
//! The enrichment pipeline walks an open-ended JSON document and only
//! interprets a handful of keys. Every place the walk relies on a value
//! having a particular shape goes through one of these helpers so a
//! mismatch aborts the whole run with the offending document path instead
//! of panicking.

use serde_json::{Map, Value};

use crate::error::EnrichError;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn shape(expected: &'static str, found: &Value, at: &str) -> EnrichError {
    EnrichError::Shape {
        expected,
        found: kind(found),
        at: at.to_string(),
    }
}

/// Error for a key that must be present but isn't.
pub(crate) fn missing(expected: &'static str, at: &str) -> EnrichError {
    EnrichError::Shape {
        expected,
        found: "nothing",
        at: at.to_string(),
    }
}

pub(crate) fn as_object<'a>(
    value: &'a Value,
    at: &str,
) -> Result<&'a Map<String, Value>, EnrichError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(shape("object", other, at)),
    }
}

pub(crate) fn as_object_mut<'a>(
    value: &'a mut Value,
    at: &str,
) -> Result<&'a mut Map<String, Value>, EnrichError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(shape("object", other, at)),
    }
}

pub(crate) fn as_array<'a>(value: &'a Value, at: &str) -> Result<&'a Vec<Value>, EnrichError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(shape("array", other, at)),
    }
}

pub(crate) fn as_array_mut<'a>(
    value: &'a mut Value,
    at: &str,
) -> Result<&'a mut Vec<Value>, EnrichError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(shape("array", other, at)),
    }
}

pub(crate) fn as_str<'a>(value: &'a Value, at: &str) -> Result<&'a str, EnrichError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(shape("string", other, at)),
    }
}

pub(crate) fn as_bool(value: &Value, at: &str) -> Result<bool, EnrichError> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(shape("bool", other, at)),
    }
}
