//! Application use cases (business logic orchestration).

mod detect_anomalies;

pub use detect_anomalies::*;
pub use run_smoke_tests::*;
