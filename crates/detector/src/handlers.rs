//! HTTP handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use sadprobe_domain::{DetectionPayload, DetectionReport};
use sadprobe_infrastructure::parse_json_bytes;

use crate::error::DetectorError;
use crate::state::AppState;

/// `POST /sad/post`: runs one batch through the windows.
///
/// # Errors
///
/// Answers 400 for bodies that are not a `{ stream, data: [object] }`
/// document and 500 if the window store is unusable.
pub async fn post_batch(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DetectionReport>, DetectorError> {
    let value = parse_json_bytes(&body).map_err(|e| DetectorError::MalformedJson(e.to_string()))?;
    let payload = DetectionPayload::from_value(value)?;
    tracing::info!(stream = %payload.stream, records = payload.data.len(), "batch received");

    let report = state.detector.execute(&payload)?;
    Ok(Json(report))
}
