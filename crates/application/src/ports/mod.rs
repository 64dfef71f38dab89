//! Port definitions (interfaces) for the infrastructure layer.

mod clock;
mod detection_client;
mod reporter;

pub use clock::Clock;
pub use detection_client::{ClientError, DetectionClient};
pub use reporter::AnomalyReporter;
