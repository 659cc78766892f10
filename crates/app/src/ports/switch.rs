//! Light switch port — abstraction over the light switching hardware.

use std::future::Future;

use lumo_domain::error::HardwareError;

/// Drives the physical (or simulated) light.
///
/// Switching is idempotent: turning an already-lit light on is a no-op at
/// the hardware level.
pub trait LightSwitch: Send + Sync {
    /// Power the light on.
    fn turn_on(&self) -> impl Future<Output = Result<(), HardwareError>> + Send;

    /// Power the light off.
    fn turn_off(&self) -> impl Future<Output = Result<(), HardwareError>> + Send;

    /// Whether the light is currently powered.
    fn is_on(&self) -> bool;
}
