//! Sadprobe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod serialization;

pub use adapters::{ConsoleReporter, ReqwestDetectionClient, SystemClock};
pub use serialization::{SerializationError, from_json_bytes, parse_json_bytes, to_json_bytes};
