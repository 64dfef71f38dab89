//! Sliding feature windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::features::{FEATURE_COUNT, FeatureVector};
use super::prediction::Prediction;

/// Number of observations kept per window.
pub const WINDOW_LENGTH: usize = 7;

/// A value further than this many standard deviations from the window mean
/// is an anomaly.
pub const DEVIATION_FACTOR: f64 = 2.0;

/// One field value of one record, ready to be compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Stream the record arrived on.
    pub stream: String,
    /// Id of the record within its batch.
    pub id: String,
    /// Field name.
    pub key: String,
    /// Arrival time.
    pub timestamp: DateTime<Utc>,
    /// Extracted features.
    pub features: FeatureVector,
}

/// Per-feature population mean and standard deviation over a full window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    /// Mean of each feature.
    pub mean: [f64; FEATURE_COUNT],
    /// Population standard deviation of each feature.
    pub std_dev: [f64; FEATURE_COUNT],
}

impl WindowStats {
    /// Computes the statistics of a set of feature vectors.
    ///
    /// Returns `None` for an empty set.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_features(features: &[FeatureVector]) -> Option<Self> {
        if features.is_empty() {
            return None;
        }
        let count = features.len() as f64;

        let mut mean = [0.0; FEATURE_COUNT];
        let mut std_dev = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            mean[i] = features.iter().map(|f| f.get(i)).sum::<f64>() / count;
            let variance = features
                .iter()
                .map(|f| (f.get(i) - mean[i]).powi(2))
                .sum::<f64>()
                / count;
            std_dev[i] = variance.sqrt();
        }

        Some(Self { mean, std_dev })
    }

    /// `Anomaly` if any feature deviates from the mean by more than
    /// `DEVIATION_FACTOR` standard deviations.
    #[must_use]
    pub fn classify(&self, features: &FeatureVector) -> Prediction {
        let deviates = (0..FEATURE_COUNT).any(|i| {
            (features.get(i) - self.mean[i]).abs() > DEVIATION_FACTOR * self.std_dev[i]
        });
        if deviates {
            Prediction::Anomaly
        } else {
            Prediction::Normal
        }
    }
}

/// Ring buffer of the latest observations for one `stream#key` slug.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureWindow {
    slots: [Option<Observation>; WINDOW_LENGTH],
    cursor: usize,
    total_writes: u64,
}

impl Default for FeatureWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureWindow {
    /// Creates an empty window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            cursor: 0,
            total_writes: 0,
        }
    }

    /// Writes an observation and predicts whether it is anomalous.
    ///
    /// The first write goes to slot 0; each later write advances the cursor
    /// and overwrites the oldest slot. A prediction is only made once the
    /// window has seen more than `WINDOW_LENGTH` writes before this one;
    /// until then the result is `Prediction::Warmup`. The new observation is
    /// part of the window it is compared against.
    pub fn push(&mut self, observation: Observation) -> Prediction {
        if self.total_writes > 0 {
            self.cursor = (self.cursor + 1) % WINDOW_LENGTH;
        }
        let features = observation.features;
        self.slots[self.cursor] = Some(observation);

        let prediction = if self.total_writes > WINDOW_LENGTH as u64 {
            self.stats()
                .map_or(Prediction::Warmup, |stats| stats.classify(&features))
        } else {
            Prediction::Warmup
        };

        self.total_writes += 1;
        prediction
    }

    /// Statistics over the window, once every slot is filled.
    #[must_use]
    pub fn stats(&self) -> Option<WindowStats> {
        let features: Option<Vec<FeatureVector>> = self
            .slots
            .iter()
            .map(|slot| slot.as_ref().map(|o| o.features))
            .collect();
        features.and_then(|f| WindowStats::from_features(&f))
    }

    /// Slot the most recent observation was written to.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of observations written over the window's lifetime.
    #[must_use]
    pub const fn total_writes(&self) -> u64 {
        self.total_writes
    }

    /// The observation stored in `slot`, if any.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<&Observation> {
        self.slots.get(slot).and_then(Option::as_ref)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn observation(features: FeatureVector) -> Observation {
        Observation {
            stream: "t1".to_string(),
            id: "id".to_string(),
            key: "name".to_string(),
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            features,
        }
    }

    fn text(value: &str) -> Observation {
        observation(FeatureVector::from_text(value))
    }

    #[test]
    fn test_warmup_covers_first_eight_writes() {
        let mut window = FeatureWindow::new();
        for _ in 0..=WINDOW_LENGTH {
            assert_eq!(window.push(text("Ankur")), Prediction::Warmup);
        }
        assert_eq!(window.total_writes(), 8);
        assert_eq!(window.push(text("Ankur")), Prediction::Normal);
    }

    #[test]
    fn test_cursor_wraps_after_last_slot() {
        let mut window = FeatureWindow::new();
        window.push(text("a"));
        assert_eq!(window.cursor(), 0);
        for expected in 1..WINDOW_LENGTH {
            window.push(text("a"));
            assert_eq!(window.cursor(), expected);
        }
        window.push(text("b"));
        assert_eq!(window.cursor(), 0);
        assert_eq!(window.slot(0).unwrap().features, FeatureVector::from_text("b"));
    }

    #[test]
    fn test_outlier_after_warmup_is_anomaly() {
        let mut window = FeatureWindow::new();
        for _ in 0..=WINDOW_LENGTH {
            window.push(observation(FeatureVector::from_number(10.0)));
        }
        assert_eq!(
            window.push(observation(FeatureVector::from_number(1000.0))),
            Prediction::Anomaly
        );
    }

    #[test]
    fn test_stats_need_full_window() {
        let mut window = FeatureWindow::new();
        window.push(text("Ankur"));
        assert!(window.stats().is_none());
    }

    #[test]
    fn test_population_std_dev() {
        let stats = WindowStats::from_features(&[
            FeatureVector::from_number(2.0),
            FeatureVector::from_number(4.0),
            FeatureVector::from_number(4.0),
            FeatureVector::from_number(4.0),
            FeatureVector::from_number(5.0),
            FeatureVector::from_number(5.0),
            FeatureVector::from_number(7.0),
            FeatureVector::from_number(9.0),
        ])
        .unwrap();
        assert!((stats.mean[0] - 5.0).abs() < f64::EPSILON);
        assert!((stats.std_dev[0] - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_classify_boundary_is_exclusive() {
        let stats = WindowStats {
            mean: [5.0, 0.0, 0.0, 0.0, 0.0],
            std_dev: [2.0, 0.0, 0.0, 0.0, 0.0],
        };
        assert_eq!(
            stats.classify(&FeatureVector::from_number(9.0)),
            Prediction::Normal
        );
        assert_eq!(
            stats.classify(&FeatureVector::from_number(9.5)),
            Prediction::Anomaly
        );
    }
}
