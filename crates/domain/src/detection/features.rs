//! Feature extraction for record values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of features extracted per value.
pub const FEATURE_COUNT: usize = 5;

/// Fixed-size feature vector for one value.
///
/// For strings the features are, in order: byte length, ASCII letters,
/// ASCII digits, spaces, and everything else. Any other value contributes
/// its numeric reading as the first feature and zeros elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Extracts features from a JSON value.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::from_text(text),
            other => Self::from_number(other.as_f64().unwrap_or(0.0)),
        }
    }

    /// Character-class features of a string.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_text(text: &str) -> Self {
        let mut letters = 0.0;
        let mut digits = 0.0;
        let mut spaces = 0.0;
        let mut other = 0.0;

        for ch in text.chars() {
            if ch.is_ascii_alphabetic() {
                letters += 1.0;
            } else if ch.is_ascii_digit() {
                digits += 1.0;
            } else if ch == ' ' {
                spaces += 1.0;
            } else {
                other += 1.0;
            }
        }

        Self([text.len() as f64, letters, digits, spaces, other])
    }

    /// A numeric value in the first slot.
    #[must_use]
    pub const fn from_number(value: f64) -> Self {
        Self([value, 0.0, 0.0, 0.0, 0.0])
    }

    /// Returns feature `index`.
    #[must_use]
    pub const fn get(&self, index: usize) -> f64 {
        self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_text_features() {
        let features = FeatureVector::from_text("Rajdeep Sharma");
        assert_eq!(features, FeatureVector([14.0, 13.0, 0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_text_features_mixed() {
        let features = FeatureVector::from_text("ABCD-12345 F");
        assert_eq!(features, FeatureVector([12.0, 5.0, 5.0, 1.0, 1.0]));
    }

    #[test]
    fn test_number_features() {
        assert_eq!(
            FeatureVector::from_value(&json!(42.5)),
            FeatureVector([42.5, 0.0, 0.0, 0.0, 0.0])
        );
    }

    #[test]
    fn test_non_numeric_scalars_are_zero() {
        assert_eq!(FeatureVector::from_value(&json!(true)), FeatureVector::default());
        assert_eq!(FeatureVector::from_value(&json!(null)), FeatureVector::default());
        assert_eq!(
            FeatureVector::from_value(&json!({"nested": 1})),
            FeatureVector::default()
        );
    }
}
