//! Light level — a normalized ambient reading.

use serde::{Deserialize, Serialize};

use crate::threshold::DarknessThreshold;

/// Normalized ambient light reading: `0.0` = fully dark, `1.0` = bright.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LightLevel(f64);

impl LightLevel {
    /// Wrap a raw sensor reading.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw reading.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this reading counts as dark: at or below the threshold.
    #[must_use]
    pub fn is_dark(self, threshold: DarknessThreshold) -> bool {
        self.0 <= threshold.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_count_reading_below_threshold_as_dark() {
        let threshold = DarknessThreshold::new(0.3).unwrap();
        assert!(LightLevel::new(0.1).is_dark(threshold));
    }

    #[test]
    fn should_count_reading_at_threshold_as_dark() {
        let threshold = DarknessThreshold::new(0.3).unwrap();
        assert!(LightLevel::new(0.3).is_dark(threshold));
    }

    #[test]
    fn should_count_reading_above_threshold_as_bright() {
        let threshold = DarknessThreshold::new(0.3).unwrap();
        assert!(!LightLevel::new(0.9).is_dark(threshold));
    }

    #[test]
    fn should_expose_raw_value() {
        assert!((LightLevel::new(0.75).value() - 0.75).abs() < f64::EPSILON);
    }
}
