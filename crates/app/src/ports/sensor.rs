//! Ambient sensor port — abstraction over light-level measurement.

use std::future::Future;

use lumo_domain::error::SensorError;
use lumo_domain::level::LightLevel;

/// Measures the current ambient light level.
pub trait AmbientSensor: Send + Sync {
    /// Take a reading.
    ///
    /// Implementations report `0.0` for fully dark and `1.0` for bright.
    fn read(&self) -> impl Future<Output = Result<LightLevel, SensorError>> + Send;
}
