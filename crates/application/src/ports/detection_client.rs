//! Detection client port
//!
//! Defines the interface for submitting batches to the detection service.

use async_trait::async_trait;
use sadprobe_domain::{DetectionPayload, DetectionResponse};

/// Errors that can occur while talking to the detection service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The endpoint URL is invalid.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Nothing is listening on the endpoint.
    #[error("connection refused: {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The service answered with something other than `200 OK`.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body is not the expected JSON.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for submitting a batch and reading back its stats.
#[async_trait]
pub trait DetectionClient: Send + Sync {
    /// Posts `payload` to the detection service and decodes the response.
    ///
    /// # Errors
    /// Returns an error on any transport failure, a non-200 status, or a
    /// body that is not JSON with a `stats` mapping.
    async fn submit(&self, payload: &DetectionPayload) -> Result<DetectionResponse, ClientError>;
}
