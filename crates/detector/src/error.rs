//! Detector error types and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sadprobe_application::ApplicationError;
use sadprobe_domain::DomainError;
use serde_json::json;
use thiserror::Error;

/// Errors raised by the detection service.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// The request body is not JSON.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// The request body is JSON but not a valid batch.
    #[error(transparent)]
    InvalidPayload(#[from] DomainError),

    /// The use case failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DetectorError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MalformedJson(_) | Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::Application(_) | Self::Config(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DetectorError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "batch processing failed");
        } else {
            tracing::warn!(error = %self, "rejected batch");
        }
        let body = Json(json!({
            "message": "error",
            "detail": self.to_string(),
        }));
        (status, body).into_response()
    }
}
