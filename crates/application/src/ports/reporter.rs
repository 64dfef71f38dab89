//! Anomaly reporter port

use sadprobe_domain::Anomaly;

/// Sink for anomaly lines.
pub trait AnomalyReporter: Send + Sync {
    /// Emits one anomaly.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output cannot be written.
    fn report(&self, anomaly: &Anomaly) -> std::io::Result<()>;
}
