//! Sadprobe Detector - Streaming anomaly detection service
//!
//! Exposes `POST /sad/post`. Each field of each posted record is compared
//! against a sliding window of earlier values for the same `stream#key`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::Router;
use axum::routing::post;
use tokio::net::TcpListener;

pub use config::DetectorConfig;
pub use error::DetectorError;
pub use state::AppState;

/// Builds the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sad/post", post(handlers::post_batch))
        .with_state(state)
}

/// Serves on an already bound listener until ctrl-c.
///
/// # Errors
///
/// Returns an error if the server fails.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), DetectorError> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Binds the configured address and serves until ctrl-c.
///
/// # Errors
///
/// Returns an error if the address is invalid, cannot be bound, or the
/// server fails.
pub async fn run_server(config: &DetectorConfig) -> Result<(), DetectorError> {
    let addr = config.addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "anomaly detector listening");
    serve(listener, AppState::new()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
