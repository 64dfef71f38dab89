//! JSON serialization helpers for wire bodies.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),
}

/// Serializes a value to compact JSON bytes.
///
/// Object keys keep their insertion order.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    Ok(serde_json::to_vec(value)?)
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

/// Parses bytes as an untyped JSON document.
///
/// Useful for inspecting the envelope before typed conversion.
///
/// # Errors
///
/// Returns an error if the bytes are not valid JSON.
pub fn parse_json_bytes(bytes: &[u8]) -> Result<serde_json::Value, SerializationError> {
    from_json_bytes(bytes)
}
