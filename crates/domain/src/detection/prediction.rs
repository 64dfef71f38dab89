//! Predictions and the detection report returned by the service.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::response::StatFlag;

/// Outcome for a single field value. On the wire: `-1`, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i8")]
pub enum Prediction {
    /// `-1`: the window has not seen enough values yet.
    Warmup,
    /// `0`: within the expected range.
    Normal,
    /// `1`: deviates from the window.
    Anomaly,
}

impl TryFrom<i64> for Prediction {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Warmup),
            0 => Ok(Self::Normal),
            1 => Ok(Self::Anomaly),
            other => Err(DomainError::InvalidPrediction(other)),
        }
    }
}

impl From<Prediction> for i8 {
    fn from(prediction: Prediction) -> Self {
        match prediction {
            Prediction::Warmup => -1,
            Prediction::Normal => 0,
            Prediction::Anomaly => 1,
        }
    }
}

/// Prediction for one field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPrediction {
    /// Field name.
    pub key: String,
    /// Outcome.
    pub prediction: Prediction,
}

/// Predictions for every field of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPrediction {
    /// Id assigned to the record.
    pub id: String,
    /// Per-field outcomes in record order.
    pub predictions: Vec<KeyPrediction>,
}

/// Full response body of the detection service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Always `"pong"` for a processed batch.
    pub message: String,
    /// Per-record predictions in batch order.
    pub result: Vec<BlockPrediction>,
    /// Per-key summary: `1` when any record flagged the key.
    pub stats: IndexMap<String, StatFlag>,
}

impl DetectionReport {
    /// Builds the report and its per-key summary from record predictions.
    ///
    /// Keys appear in `stats` in first-seen order. Warm-up counts as normal.
    #[must_use]
    pub fn from_blocks(result: Vec<BlockPrediction>) -> Self {
        let mut stats: IndexMap<String, StatFlag> = IndexMap::new();
        for prediction in result.iter().flat_map(|block| &block.predictions) {
            let anomalous = prediction.prediction == Prediction::Anomaly;
            stats
                .entry(prediction.key.clone())
                .and_modify(|flag| {
                    if anomalous {
                        *flag = StatFlag::Anomaly;
                    }
                })
                .or_insert_with(|| StatFlag::from(anomalous));
        }

        Self {
            message: "pong".to_string(),
            result,
            stats,
        }
    }
}
