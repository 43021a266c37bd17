//! Structural validation of JIF documents.
//!
//! The checks are deliberately loose and mirror the format's historical
//! behavior:
//! - every field is tested for truthiness, so a legitimate `0` coordinate or
//!   channel counts as missing;
//! - a single matching record is enough to accept the whole document.
//!
//! An expanded document therefore needs at least one pixel with `x`, `y`
//! and all four channels non-zero. Compact documents are unaffected because
//! `"0,0"` is a non-empty string.

use serde_json::Value;

use super::DecodeError;
use crate::format::JifFormat;

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy, everything
/// else (including empty arrays and objects) is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Check that `document` is structurally a JIF document in `format` and
/// hand back its record array.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDocument` naming the first failed check.
pub(super) fn validate(document: &Value, format: JifFormat) -> Result<&[Value], DecodeError> {
    for key in ["width", "height", "pixels"] {
        if !has_truthy_field(document, key) {
            return Err(DecodeError::InvalidDocument(format!(
                "`{key}` is missing or empty"
            )));
        }
    }

    let records = document["pixels"]
        .as_array()
        .ok_or_else(|| DecodeError::InvalidDocument("`pixels` is not an array".to_string()))?;

    if !records.iter().any(|record| matches_format(record, format)) {
        return Err(DecodeError::InvalidDocument(format!(
            "no record matches the {format:?} format"
        )));
    }

    Ok(records.as_slice())
}

/// Whether `record` carries every field of `format` with a truthy value.
fn matches_format(record: &Value, format: JifFormat) -> bool {
    format
        .record_keys()
        .iter()
        .all(|key| has_truthy_field(record, key))
}

fn has_truthy_field(object: &Value, key: &str) -> bool {
    object.get(key).is_some_and(is_truthy)
}
