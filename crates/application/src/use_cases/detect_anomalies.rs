//! Detect anomalies use case.

use std::sync::Mutex;

use sadprobe_domain::{DetectionPayload, DetectionReport, WindowStore};

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::Clock;

/// Use case for running batches through the shared window store.
///
/// A batch is applied while holding the store lock, so concurrent batches
/// never interleave their observations.
pub struct DetectAnomalies<K: Clock> {
    clock: K,
    store: Mutex<WindowStore>,
}

impl<K: Clock> DetectAnomalies<K> {
    /// Creates a new `DetectAnomalies` use case with an empty store.
    #[must_use]
    pub fn new(clock: K) -> Self {
        Self {
            clock,
            store: Mutex::new(WindowStore::new()),
        }
    }

    /// Observes every field of every record and returns the predictions.
    ///
    /// # Errors
    /// Returns `ApplicationError::Internal` if the store lock was poisoned.
    pub fn execute(&self, payload: &DetectionPayload) -> ApplicationResult<DetectionReport> {
        let now = self.clock.now();
        let mut store = self
            .store
            .lock()
            .map_err(|e| ApplicationError::Internal(format!("window store poisoned: {e}")))?;

        let report = store.observe_batch(payload, now);
        tracing::debug!(
            stream = %payload.stream,
            records = payload.data.len(),
            windows = store.len(),
            "batch observed"
        );
        Ok(report)
    }

    /// Number of `stream#key` windows tracked so far.
    ///
    /// # Errors
    /// Returns `ApplicationError::Internal` if the store lock was poisoned.
    pub fn window_count(&self) -> ApplicationResult<usize> {
        self.store
            .lock()
            .map(|store| store.len())
            .map_err(|e| ApplicationError::Internal(format!("window store poisoned: {e}")))
    }
}
