//! Sadprobe Application - Ports and use cases
//!
//! The application layer orchestrates the domain: it sends smoke batches
//! through a `DetectionClient`, reports anomalies through an
//! `AnomalyReporter`, and runs the detection model behind a `Clock`.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
