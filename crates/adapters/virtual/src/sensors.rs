//! Virtual ambient sensors.
//!
//! [`TimeOfDaySensor`] derives darkness from the wall clock: inside the
//! configured evening→morning window it reports `0.0` (dark), outside it
//! `1.0` (bright). [`FixedLevelSensor`] always reports the same level.

use chrono::{Local, NaiveTime};

use lumo_app::ports::AmbientSensor;
use lumo_domain::error::SensorError;
use lumo_domain::level::LightLevel;

/// Sensor reporting darkness based on a configured time window.
///
/// The window is inclusive on both ends and may wrap midnight
/// (e.g. 21:00→06:00) or not (e.g. 01:00→08:00).
#[derive(Debug, Clone, Copy)]
pub struct TimeOfDaySensor {
    evening: NaiveTime,
    morning: NaiveTime,
}

impl TimeOfDaySensor {
    /// Build a sensor reporting dark between `evening` and `morning`.
    #[must_use]
    pub fn new(evening: NaiveTime, morning: NaiveTime) -> Self {
        Self { evening, morning }
    }

    fn is_dark_at(self, current: NaiveTime) -> bool {
        if self.evening < self.morning {
            self.evening <= current && current <= self.morning
        } else {
            current >= self.evening || current <= self.morning
        }
    }
}

impl AmbientSensor for TimeOfDaySensor {
    async fn read(&self) -> Result<LightLevel, SensorError> {
        let now = Local::now().time();
        let dark = self.is_dark_at(now);
        tracing::debug!(%now, dark, "time-of-day reading");
        Ok(LightLevel::new(if dark { 0.0 } else { 1.0 }))
    }
}

/// Sensor always reporting the same level. Useful for demos and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedLevelSensor {
    level: f64,
}

impl FixedLevelSensor {
    /// Build a sensor stuck at `level`.
    #[must_use]
    pub fn new(level: f64) -> Self {
        Self { level }
    }
}

impl AmbientSensor for FixedLevelSensor {
    async fn read(&self) -> Result<LightLevel, SensorError> {
        Ok(LightLevel::new(self.level))
    }
}

/// Wrapper enum over the concrete virtual sensor types, so the composition
/// root can pick one at runtime without dynamic dispatch.
#[derive(Debug, Clone, Copy)]
pub enum VirtualSensor {
    /// Darkness from the wall clock.
    TimeOfDay(TimeOfDaySensor),
    /// Constant reading.
    Fixed(FixedLevelSensor),
}

impl AmbientSensor for VirtualSensor {
    async fn read(&self) -> Result<LightLevel, SensorError> {
        match self {
            Self::TimeOfDay(sensor) => sensor.read().await,
            Self::Fixed(sensor) => sensor.read().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn should_report_dark_at_night_when_window_wraps_midnight() {
        let sensor = TimeOfDaySensor::new(time(21, 0), time(6, 0));
        assert!(sensor.is_dark_at(time(23, 0)));
        assert!(sensor.is_dark_at(time(3, 30)));
    }

    #[test]
    fn should_report_bright_at_noon_when_window_wraps_midnight() {
        let sensor = TimeOfDaySensor::new(time(21, 0), time(6, 0));
        assert!(!sensor.is_dark_at(time(12, 0)));
    }

    #[test]
    fn should_include_window_boundaries() {
        let sensor = TimeOfDaySensor::new(time(21, 0), time(6, 0));
        assert!(sensor.is_dark_at(time(21, 0)));
        assert!(sensor.is_dark_at(time(6, 0)));
        assert!(!sensor.is_dark_at(time(6, 1)));
    }

    #[test]
    fn should_handle_window_that_does_not_wrap() {
        let sensor = TimeOfDaySensor::new(time(1, 0), time(8, 0));
        assert!(sensor.is_dark_at(time(4, 0)));
        assert!(!sensor.is_dark_at(time(9, 0)));
        assert!(!sensor.is_dark_at(time(0, 30)));
    }

    #[tokio::test]
    async fn should_read_zero_or_one_from_time_of_day_sensor() {
        let sensor = TimeOfDaySensor::new(time(21, 0), time(6, 0));
        let level = sensor.read().await.unwrap().value();
        assert!(level.abs() < f64::EPSILON || (level - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_read_constant_level_from_fixed_sensor() {
        let sensor = FixedLevelSensor::new(0.42);
        assert_eq!(sensor.read().await.unwrap().value(), 0.42);
    }

    #[tokio::test]
    async fn should_dispatch_through_wrapper_enum() {
        let sensor = VirtualSensor::Fixed(FixedLevelSensor::new(0.9));
        assert_eq!(sensor.read().await.unwrap().value(), 0.9);
    }
}
