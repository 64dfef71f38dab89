//! Sadprobe - Main Entry Point
//!
//! Posts the fixed smoke suite to the local anomaly detector and prints one
//! line per flagged key. Any failure aborts the run with a non-zero exit.

use sadprobe_application::use_cases::RunSmokeTests;
use sadprobe_domain::smoke_suite;
use sadprobe_infrastructure::{ConsoleReporter, ReqwestDetectionClient};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries only anomaly lines.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = ReqwestDetectionClient::localhost()?;
    tracing::info!(endpoint = %client.endpoint(), "starting smoke run");

    let runner = RunSmokeTests::new(client, ConsoleReporter::stdout());
    if let Err(e) = runner.run(&smoke_suite()).await {
        tracing::error!(error = %e, "smoke run aborted");
        return Err(e.into());
    }

    Ok(())
}
