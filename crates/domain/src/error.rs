//! Common error types used across the workspace.
//!
//! Each layer produces a typed error and converts into [`LumoError`]
//! via `#[from]` — no stringly-typed variants.

use thiserror::Error;

/// Top-level error for the lumo workspace.
#[derive(Debug, Error)]
pub enum LumoError {
    /// A domain invariant was violated by caller input.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The light switching hardware misbehaved.
    #[error(transparent)]
    Hardware(#[from] HardwareError),
    /// The ambient sensor could not be read.
    #[error(transparent)]
    Sensor(#[from] SensorError),
}

/// Caller input violated a domain invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The darkness threshold must be a finite number.
    #[error("darkness threshold must be a finite number")]
    NonFiniteThreshold,
    /// A threshold update carried no value.
    #[error("threshold value is required")]
    MissingThreshold,
}

/// The light switching hardware reported a fault.
#[derive(Debug, Error)]
#[error("light hardware fault: {reason}")]
pub struct HardwareError {
    /// Human-readable description of the fault.
    pub reason: String,
}

/// An ambient sensor reading failed.
#[derive(Debug, Error)]
#[error("sensor read failed: {reason}")]
pub struct SensorError {
    /// Human-readable description of the failure.
    pub reason: String,
}
