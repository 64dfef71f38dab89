//! Shared service state.

use std::sync::Arc;

use sadprobe_application::use_cases::DetectAnomalies;
use sadprobe_infrastructure::SystemClock;

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The detection use case and its window store.
    pub detector: Arc<DetectAnomalies<SystemClock>>,
}

impl AppState {
    /// Creates state with an empty window store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            detector: Arc::new(DetectAnomalies::new(SystemClock::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
