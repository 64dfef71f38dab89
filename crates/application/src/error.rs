//! Application error types

use sadprobe_domain::DomainError;
use thiserror::Error;

use crate::ports::ClientError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Submitting a test case to the detection service failed.
    #[error("test case '{test_name}' failed: {source}")]
    Client {
        /// Name of the test case being sent.
        test_name: String,
        /// What went wrong on the wire.
        #[source]
        source: ClientError,
    },

    /// Writing an anomaly line failed.
    #[error("report error: {0}")]
    Report(#[from] std::io::Error),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
