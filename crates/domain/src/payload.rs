//! Request body sent to the detection service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::record::{Record, records_from_values};

/// The detection endpoint the smoke runner always talks to.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:40404/sad/post";

/// Wire body of a detection request: `{ "stream": ..., "data": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionPayload {
    /// Stream the batch belongs to.
    pub stream: String,
    /// The batch of records.
    pub data: Vec<Record>,
}

impl DetectionPayload {
    /// Creates a payload for the given stream and batch.
    #[must_use]
    pub fn new(stream: impl Into<String>, data: Vec<Record>) -> Self {
        Self {
            stream: stream.into(),
            data,
        }
    }

    /// Builds a payload from an untyped JSON document.
    ///
    /// Unlike plain deserialization this reports which part of the envelope
    /// is wrong, so the service can answer with a useful detail.
    ///
    /// # Errors
    ///
    /// Returns an error if `stream` is not a string, `data` is not an array,
    /// or any element of `data` is not an object.
    pub fn from_value(value: Value) -> DomainResult<Self> {
        let Value::Object(mut envelope) = value else {
            return Err(DomainError::InvalidPayload(
                "body must be a JSON object".to_string(),
            ));
        };

        let stream = match envelope.remove("stream") {
            Some(Value::String(stream)) => stream,
            Some(_) => {
                return Err(DomainError::InvalidPayload(
                    "`stream` must be a string".to_string(),
                ));
            }
            None => return Err(DomainError::InvalidPayload("missing `stream`".to_string())),
        };

        let data = match envelope.remove("data") {
            Some(Value::Array(values)) => records_from_values(values)?,
            Some(_) => {
                return Err(DomainError::InvalidPayload(
                    "`data` must be an array".to_string(),
                ));
            }
            None => return Err(DomainError::InvalidPayload("missing `data`".to_string())),
        };

        Ok(Self { stream, data })
    }
}
