//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A test case was declared without a name.
    #[error("invalid test case: {0}")]
    InvalidTestCase(String),

    /// A stat flag was outside the `0 | 1` range.
    #[error("invalid stat flag: {0} (expected 0 or 1)")]
    InvalidStatFlag(i64),

    /// A prediction value was outside the `-1 | 0 | 1` range.
    #[error("invalid prediction: {0} (expected -1, 0 or 1)")]
    InvalidPrediction(i64),

    /// A record in a batch is not a JSON object.
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Position of the record in the batch.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The payload envelope is malformed.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
