//! Sadprobe Domain - Core types
//!
//! This crate defines the domain model shared by the smoke runner and the
//! streaming anomaly detector. All types here are pure Rust with no I/O
//! dependencies.

pub mod detection;
pub mod error;
pub mod id;
pub mod payload;
pub mod record;
pub mod response;
pub mod test_case;

pub use detection::{
    BlockPrediction, DetectionReport, FeatureVector, FeatureWindow, KeyPrediction, Observation,
    Prediction, WindowStats, WindowStore,
};
pub use error::{DomainError, DomainResult};
pub use id::generate_id;
pub use payload::{DEFAULT_ENDPOINT, DetectionPayload};
pub use record::{Record, record};
pub use response::{Anomaly, DetectionResponse, StatFlag};
pub use test_case::{TestCase, smoke_suite};
