//! # lumo-adapter-virtual
//!
//! Virtual hardware adapter — simulated implementations of the hardware
//! ports for machines without a relay or light sensor attached.
//!
//! ## Provided implementations
//!
//! | Type | Port | Behaviour |
//! |------|------|-----------|
//! | [`VirtualRelay`] | `LightSwitch` | Remembers on/off state, logs transitions |
//! | [`TimeOfDaySensor`] | `AmbientSensor` | Reports dark inside a configured evening→morning window |
//! | [`FixedLevelSensor`] | `AmbientSensor` | Constant reading, for demos and tests |
//!
//! ## Dependency rule
//!
//! Depends on `lumo-app` (port traits) and `lumo-domain` only.

mod relay;
mod sensors;

pub use relay::VirtualRelay;
pub use sensors::{FixedLevelSensor, TimeOfDaySensor, VirtualSensor};
