//! Detection service responses as seen by the smoke runner.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A per-key anomaly flag. On the wire this is the integer `0` or `1`.
///
/// Only those two integers decode. `1.0`, `true` or any other value fail,
/// which fails the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum StatFlag {
    /// `0`: nothing unusual.
    Normal,
    /// `1`: the key was flagged.
    Anomaly,
}

impl StatFlag {
    /// Returns true for `1`.
    #[must_use]
    pub const fn is_anomaly(self) -> bool {
        matches!(self, Self::Anomaly)
    }
}

impl TryFrom<i64> for StatFlag {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Anomaly),
            other => Err(DomainError::InvalidStatFlag(other)),
        }
    }
}

impl From<StatFlag> for u8 {
    fn from(flag: StatFlag) -> Self {
        match flag {
            StatFlag::Normal => 0,
            StatFlag::Anomaly => 1,
        }
    }
}

impl From<bool> for StatFlag {
    fn from(anomalous: bool) -> Self {
        if anomalous { Self::Anomaly } else { Self::Normal }
    }
}

/// The part of the service response the runner inspects.
///
/// Other top-level keys are ignored; a missing `stats` key fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetectionResponse {
    /// Stat name to flag, in the order the service sent them.
    pub stats: IndexMap<String, StatFlag>,
}

impl DetectionResponse {
    /// Keys flagged with `1`, in response order.
    pub fn anomalous_keys(&self) -> impl Iterator<Item = &str> {
        self.stats
            .iter()
            .filter(|(_, flag)| flag.is_anomaly())
            .map(|(key, _)| key.as_str())
    }

    /// Anomalies attributed to the given test case name.
    #[must_use]
    pub fn anomalies(&self, test_name: &str) -> Vec<Anomaly> {
        self.anomalous_keys()
            .map(|key| Anomaly::new(test_name, key))
            .collect()
    }
}

/// A stat key flagged as anomalous while running a named test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    /// Name of the test case that produced it.
    pub test_name: String,
    /// The flagged stat key.
    pub key: String,
}

impl Anomaly {
    /// Creates an anomaly.
    #[must_use]
    pub fn new(test_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Anomaly detected {} {}", self.test_name, self.key)
    }
}
