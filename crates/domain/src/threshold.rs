//! Darkness threshold — the sensor-value cutoff for auto mode.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Sensor-value cutoff at or below which auto mode turns the light on.
///
/// Always within `[0.0, 1.0]`: construction clamps out-of-range input and
/// rejects non-finite input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DarknessThreshold(f64);

impl DarknessThreshold {
    /// Build a threshold from raw input, clamping it into `[0.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteThreshold`] for NaN or infinite
    /// input.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteThreshold);
        }
        Ok(Self(value.clamp(0.0, 1.0)))
    }

    /// The raw threshold value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for DarknessThreshold {
    fn default() -> Self {
        Self(0.3)
    }
}

impl std::fmt::Display for DarknessThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
