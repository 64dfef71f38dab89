//! Anomaly detector server binary.

use sadprobe_detector::DetectorConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DetectorConfig::from_env()?;

    tracing::info!(
        "Starting sadprobe anomaly detector v{}",
        env!("CARGO_PKG_VERSION")
    );

    sadprobe_detector::run_server(&config).await?;

    Ok(())
}
