//! Wall-clock source for observation timestamps.

use chrono::{DateTime, Utc};
use sadprobe_application::ports::Clock;

/// Stamps detector observations with the current UTC time.
///
/// All observations of one batch share a single reading, taken when the
/// batch reaches the window store.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
