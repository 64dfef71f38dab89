//! Smoke test cases.

use crate::error::{DomainError, DomainResult};
use crate::payload::DetectionPayload;
use crate::record::{Record, record};

/// One batch to submit, labelled with the name used when reporting anomalies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    name: String,
    records: Vec<Record>,
    stream_id: String,
}

impl TestCase {
    /// Creates a test case.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTestCase` if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        records: Vec<Record>,
        stream_id: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidTestCase(
                "name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            records,
            stream_id: stream_id.into(),
        })
    }

    /// Label used in anomaly lines.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The batch of records.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Stream the batch is submitted to.
    #[must_use]
    pub fn stream_id(&self) -> &str {
        &self.stream_id
    }

    /// Builds the wire payload for this case.
    #[must_use]
    pub fn payload(&self) -> DetectionPayload {
        DetectionPayload::new(self.stream_id.clone(), self.records.clone())
    }

    fn fixed(name: &str, person: &str, stream_id: &str) -> Self {
        Self {
            name: name.to_string(),
            records: vec![record([("name", person)])],
            stream_id: stream_id.to_string(),
        }
    }
}

/// The fixed smoke suite: three identical `Ankur` batches followed by an
/// outlier name, all on stream `t1`.
#[must_use]
pub fn smoke_suite() -> Vec<TestCase> {
    vec![
        TestCase::fixed("t1", "Ankur", "t1"),
        TestCase::fixed("t1", "Ankur", "t1"),
        TestCase::fixed("t1", "Ankur", "t1"),
        TestCase::fixed("t1", "Rajdeep Sharma", "t1"),
    ]
}
