//! Light controller — auto/manual control use-cases.
//!
//! Owns the switch and sensor ports. The auto-mode loop periodically reads
//! the sensor and switches the light based on the darkness threshold; manual
//! commands override it (and take the controller out of auto mode).

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use lumo_domain::error::LumoError;
use lumo_domain::event::{Event, EventKind, SwitchCause};
use lumo_domain::level::LightLevel;
use lumo_domain::status::StatusSnapshot;
use lumo_domain::threshold::DarknessThreshold;

use crate::ports::{AmbientSensor, EventPublisher, LightSwitch};

/// Application service coordinating the light, the sensor, and the mode.
///
/// Generic over the switch, sensor, and publisher ports to avoid dynamic
/// dispatch. All state is interior so handlers can share one instance
/// behind an `Arc`.
pub struct LightController<S, A, P> {
    switch: S,
    sensor: A,
    publisher: P,
    auto_enabled: AtomicBool,
    threshold: Mutex<DarknessThreshold>,
    last_level: Mutex<Option<LightLevel>>,
}

impl<S, A, P> LightController<S, A, P>
where
    S: LightSwitch,
    A: AmbientSensor,
    P: EventPublisher,
{
    /// Create a controller with the given ports and initial settings.
    pub fn new(
        switch: S,
        sensor: A,
        publisher: P,
        threshold: DarknessThreshold,
        auto_enabled: bool,
    ) -> Self {
        Self {
            switch,
            sensor,
            publisher,
            auto_enabled: AtomicBool::new(auto_enabled),
            threshold: Mutex::new(threshold),
            last_level: Mutex::new(None),
        }
    }

    /// Snapshot the current controller state.
    ///
    /// `sensor_value` is `None` until the auto-mode loop has completed its
    /// first successful reading.
    #[must_use]
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            is_on: self.switch.is_on(),
            auto: self.auto_enabled(),
            sensor_value: self.lock_last_level().map(LightLevel::value),
            darkness_threshold: self.lock_threshold().value(),
        }
    }

    /// Whether auto mode is currently active.
    #[must_use]
    pub fn auto_enabled(&self) -> bool {
        self.auto_enabled.load(Ordering::SeqCst)
    }

    /// Enable or disable automatic mode, returning the new setting.
    ///
    /// # Errors
    ///
    /// Propagates publisher failures.
    pub async fn set_auto(&self, enabled: bool) -> Result<bool, LumoError> {
        let was = self.auto_enabled.swap(enabled, Ordering::SeqCst);
        if was != enabled {
            tracing::info!(auto = enabled, "auto mode changed");
            self.publisher
                .publish(Event::new(EventKind::ModeChanged { auto: enabled }))
                .await?;
        }
        Ok(enabled)
    }

    /// Switch the light directly, taking the controller out of auto mode.
    ///
    /// # Errors
    ///
    /// Propagates hardware and publisher failures.
    pub async fn set_manual(&self, on: bool) -> Result<(), LumoError> {
        self.set_auto(false).await?;

        let was_on = self.switch.is_on();
        self.drive_switch(on).await?;
        if was_on != on {
            self.publisher
                .publish(Event::new(EventKind::LightSwitched {
                    on,
                    cause: SwitchCause::Manual,
                }))
                .await?;
        }
        tracing::info!(on, "manual command applied");
        Ok(())
    }

    /// Update the darkness threshold, returning the stored (clamped) value.
    ///
    /// # Errors
    ///
    /// Returns a validation error for non-finite input; propagates publisher
    /// failures.
    pub async fn set_threshold(&self, value: f64) -> Result<DarknessThreshold, LumoError> {
        let threshold = DarknessThreshold::new(value)?;
        *self.lock_threshold_mut() = threshold;
        tracing::info!(threshold = threshold.value(), "darkness threshold changed");
        self.publisher
            .publish(Event::new(EventKind::ThresholdChanged {
                threshold: threshold.value(),
            }))
            .await?;
        Ok(threshold)
    }

    /// Run one auto-mode evaluation.
    ///
    /// When auto mode is active: read the sensor, record the reading, and
    /// bring the light in line with the darkness comparison. A no-op when
    /// auto mode is off.
    ///
    /// # Errors
    ///
    /// Returns sensor, hardware, or publisher failures; the caller decides
    /// whether to keep looping (the poll loop does).
    pub async fn tick(&self) -> Result<(), LumoError> {
        if !self.auto_enabled() {
            return Ok(());
        }

        let level = self.sensor.read().await?;
        tracing::debug!(level = level.value(), "sensor reading");
        *self.lock_last_level_mut() = Some(level);

        let should_be_on = level.is_dark(self.lock_threshold());
        if should_be_on != self.switch.is_on() {
            self.drive_switch(should_be_on).await?;
            self.publisher
                .publish(Event::new(EventKind::LightSwitched {
                    on: should_be_on,
                    cause: SwitchCause::Auto,
                }))
                .await?;
        }
        Ok(())
    }

    /// Evaluate auto mode forever, once per `poll_interval`.
    ///
    /// Failures are logged and the loop continues; it never returns.
    pub async fn run_auto_loop(&self, poll_interval: Duration) {
        let mut ticker = tokio::time::interval(poll_interval);
        loop {
            ticker.tick().await;
            if let Err(err) = self.tick().await {
                tracing::warn!(error = %err, "auto-mode evaluation failed");
            }
        }
    }

    async fn drive_switch(&self, on: bool) -> Result<(), LumoError> {
        if on {
            self.switch.turn_on().await?;
        } else {
            self.switch.turn_off().await?;
        }
        Ok(())
    }

    fn lock_threshold(&self) -> DarknessThreshold {
        self.threshold
            .lock()
            .map_or_else(|poisoned| *poisoned.into_inner(), |guard| *guard)
    }

    fn lock_threshold_mut(&self) -> std::sync::MutexGuard<'_, DarknessThreshold> {
        self.threshold
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock_last_level(&self) -> Option<LightLevel> {
        self.last_level
            .lock()
            .map_or_else(|poisoned| *poisoned.into_inner(), |guard| *guard)
    }

    fn lock_last_level_mut(&self) -> std::sync::MutexGuard<'_, Option<LightLevel>> {
        self.last_level
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
