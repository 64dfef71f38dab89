//! All feature windows of a detector, keyed by `stream#key`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::features::FeatureVector;
use super::prediction::{BlockPrediction, DetectionReport, KeyPrediction};
use super::window::{FeatureWindow, Observation};
use crate::id::generate_id;
use crate::payload::DetectionPayload;

/// In-memory window store.
#[derive(Debug, Default)]
pub struct WindowStore {
    windows: HashMap<String, FeatureWindow>,
}

impl WindowStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of the window for a field of a stream.
    #[must_use]
    pub fn slug(stream: &str, key: &str) -> String {
        format!("{stream}#{key}")
    }

    /// Runs a whole batch through the windows and reports per-field outcomes.
    ///
    /// Records are processed in order and every record gets a fresh id. All
    /// observations of the batch share `now` as their timestamp.
    pub fn observe_batch(
        &mut self,
        payload: &DetectionPayload,
        now: DateTime<Utc>,
    ) -> DetectionReport {
        let blocks = payload
            .data
            .iter()
            .map(|record| {
                let id = generate_id();
                let predictions = record
                    .iter()
                    .map(|(key, value)| {
                        let observation = Observation {
                            stream: payload.stream.clone(),
                            id: id.clone(),
                            key: key.clone(),
                            timestamp: now,
                            features: FeatureVector::from_value(value),
                        };
                        let prediction = self
                            .windows
                            .entry(Self::slug(&payload.stream, key))
                            .or_default()
                            .push(observation);
                        KeyPrediction {
                            key: key.clone(),
                            prediction,
                        }
                    })
                    .collect();
                BlockPrediction { id, predictions }
            })
            .collect();

        DetectionReport::from_blocks(blocks)
    }

    /// The window for a slug, if one exists.
    #[must_use]
    pub fn window(&self, slug: &str) -> Option<&FeatureWindow> {
        self.windows.get(slug)
    }

    /// Number of windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Returns true if no value has been observed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
