//! Streaming anomaly detection model.
//!
//! Every field of every record is turned into a small feature vector and
//! compared against a sliding window of the previous values seen for the
//! same `stream#key` slug.

mod features;
mod prediction;
mod store;
mod window;

pub use features::{FEATURE_COUNT, FeatureVector};
pub use prediction::{BlockPrediction, DetectionReport, KeyPrediction, Prediction};
pub use store::WindowStore;
pub use window::{DEVIATION_FACTOR, FeatureWindow, Observation, WINDOW_LENGTH, WindowStats};
