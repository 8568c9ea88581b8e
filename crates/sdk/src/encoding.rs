//! Form encoding of parameter records.
//!
//! The API reads nested parameters from bracketed keys: `metadata[tier]=gold`,
//! `expand[0]=customer`, `tiers[1][up_to]=inf`. Records are serialized to
//! JSON first and then flattened into those pairs, so every serde attribute
//! on the parameter types (renames, skipped `None`s, `""` for cleared
//! fields) carries through unchanged.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Flattens a parameter record into bracketed key/value pairs, in field order.
pub fn to_form_pairs<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params).map_err(|e| Error::Encode(e.to_string()))?;
    let mut pairs = Vec::new();
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                flatten(key, value, &mut pairs);
            }
        }
        Value::Null => {}
        other => {
            return Err(Error::Encode(format!(
                "parameters must serialize to an object, got {}",
                other
            )));
        }
    }
    Ok(pairs)
}

/// `application/x-www-form-urlencoded` rendering of the pairs.
pub fn to_form_string(pairs: &[(String, String)]) -> Result<String> {
    serde_urlencoded::to_string(pairs).map_err(|e| Error::Encode(e.to_string()))
}

/// Percent-encodes an identifier for use as a single path segment.
pub fn path_segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

fn flatten(key: String, value: Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s)),
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                flatten(format!("{}[{}]", key, index), item, pairs);
            }
        }
        Value::Object(map) => {
            for (field, item) in map {
                flatten(format!("{}[{}]", key, field), item, pairs);
            }
        }
    }
}
