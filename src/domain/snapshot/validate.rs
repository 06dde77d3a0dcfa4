//! JSON snapshot parsing and structural validation.

use serde_json::{Map, Value};

use super::error::ParseError;
use super::legacy;
use super::model::Snapshot;

const REQUIRED_META_FIELDS: [&str; 3] = ["hostname", "os_version", "arch"];
const REQUIRED_OBJECTS: [&str; 4] = ["package_managers", "development", "terminal", "languages"];

/// Parse and validate snapshot JSON.
///
/// The required top-level structure is checked on the raw JSON value before
/// the typed decode, so a malformed document is rejected with a reason that
/// names the offending key.
pub fn parse_snapshot(raw: &str) -> Result<Snapshot, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let value: Value =
        serde_json::from_str(raw).map_err(|e| ParseError::NotJson(e.to_string()))?;

    validate_structure(&value)?;

    serde_json::from_value(value).map_err(|e| ParseError::shape(e.to_string()))
}

/// Parse snapshot text, falling back to the legacy delimited format when the
/// input is not JSON at all.
///
/// JSON with the wrong shape is returned as [`ParseError::InvalidShape`].
pub fn load_snapshot(raw: &str) -> Result<Snapshot, ParseError> {
    match parse_snapshot(raw) {
        Err(ParseError::NotJson(_)) => legacy::parse_legacy(raw),
        other => other,
    }
}

fn validate_structure(value: &Value) -> Result<(), ParseError> {
    let root = value.as_object().ok_or_else(|| ParseError::shape("top level must be an object"))?;

    let meta = require_object(root, "meta")?;
    for field in REQUIRED_META_FIELDS {
        match meta.get(field).and_then(Value::as_str) {
            Some(text) if !text.trim().is_empty() => {}
            _ => return Err(ParseError::shape(format!("meta.{field} must be a non-empty string"))),
        }
    }

    for key in REQUIRED_OBJECTS {
        require_object(root, key)?;
    }

    if !root.get("applications").is_some_and(Value::is_array) {
        return Err(ParseError::shape("'applications' must be an array"));
    }

    Ok(())
}

fn require_object<'a>(
    root: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Map<String, Value>, ParseError> {
    root.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| ParseError::shape(format!("'{key}' must be an object")))
}
