//! Batch records.
//!
//! A record is an arbitrary JSON object. Field order is preserved as written
//! so that payloads go over the wire exactly as they were declared.

use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// A single record of a batch: field name to value.
pub type Record = Map<String, Value>;

/// Builds a record from `(field, value)` pairs, keeping their order.
#[must_use]
pub fn record<K, V, I>(fields: I) -> Record
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Converts a list of raw JSON values into records.
///
/// # Errors
///
/// Returns `DomainError::InvalidRecord` for the first value that is not an object.
pub fn records_from_values(values: Vec<Value>) -> DomainResult<Vec<Record>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(map) => Ok(map),
            other => Err(DomainError::InvalidRecord {
                index,
                reason: format!("expected an object, got {}", json_kind(&other)),
            }),
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
