//! Virtual relay — an in-memory stand-in for the light switching hardware.

use std::sync::Mutex;

use lumo_app::ports::LightSwitch;
use lumo_domain::error::HardwareError;

/// A simulated relay that remembers its state and logs every transition.
#[derive(Default)]
pub struct VirtualRelay {
    on: Mutex<bool>,
}

impl VirtualRelay {
    fn set(&self, on: bool) {
        *self
            .on
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = on;
    }
}

impl LightSwitch for VirtualRelay {
    async fn turn_on(&self) -> Result<(), HardwareError> {
        tracing::info!("virtual relay: on");
        self.set(true);
        Ok(())
    }

    async fn turn_off(&self) -> Result<(), HardwareError> {
        tracing::info!("virtual relay: off");
        self.set(false);
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
            .lock()
            .map_or_else(|poisoned| *poisoned.into_inner(), |guard| *guard)
    }
}
