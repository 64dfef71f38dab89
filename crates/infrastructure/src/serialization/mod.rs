//! JSON wire helpers.
//!
//! Bodies are written compact and in insertion order, so a payload goes out
//! with its fields exactly as they were declared.

mod json;

pub use json::*;
