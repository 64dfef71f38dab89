//! Detection client implementation using reqwest.
//!
//! This adapter implements the `DetectionClient` port. It posts one JSON
//! batch per call and decodes the `stats` mapping of the answer.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header::CONTENT_TYPE};
use sadprobe_application::ports::{ClientError, DetectionClient};
use sadprobe_domain::{DEFAULT_ENDPOINT, DetectionPayload, DetectionResponse};

use crate::serialization::{from_json_bytes, to_json_bytes};

/// HTTP detection client using reqwest.
///
/// No timeout and no retry are configured: a request either resolves or
/// fails, and the failure is handed back to the caller as is. Idle
/// connections are never pooled, so every request opens its own socket.
#[derive(Debug, Clone)]
pub struct ReqwestDetectionClient {
    client: Client,
    endpoint: Url,
}

impl ReqwestDetectionClient {
    /// Creates a client for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or the client cannot be created.
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| ClientError::InvalidUrl(format!("{e}: {endpoint}")))?;
        let client = Client::builder()
            .user_agent(concat!("sadprobe/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ClientError::Other(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Creates a client for the fixed local endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn localhost() -> Result<Self, ClientError> {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// Creates a new detection client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// The URL batches are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Maps reqwest errors to `ClientError`.
    fn map_error(error: &reqwest::Error) -> ClientError {
        if error.is_timeout() {
            return ClientError::Timeout;
        }

        if error.is_connect() {
            let message = error.to_string();
            let chain = error_chain(error).to_lowercase();
            if chain.contains("refused") {
                let url = error.url();
                return ClientError::ConnectionRefused {
                    host: url
                        .and_then(Url::host_str)
                        .unwrap_or("unknown")
                        .to_string(),
                    port: url.and_then(Url::port_or_known_default).unwrap_or(80),
                };
            }
            return ClientError::ConnectionFailed(message);
        }

        ClientError::Other(error_chain(error))
    }
}

/// Renders an error with all its sources, outermost first.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

#[async_trait]
impl DetectionClient for ReqwestDetectionClient {
    async fn submit(&self, payload: &DetectionPayload) -> Result<DetectionResponse, ClientError> {
        let body = to_json_bytes(payload).map_err(|e| ClientError::Other(e.to_string()))?;

        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "posting batch");
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Self::map_error(&e))?;

        let status = response.status();
        let body_bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Other(format!("Failed to read body: {e}")))?;

        if status != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body_bytes).into_owned(),
            });
        }

        from_json_bytes(&body_bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}
