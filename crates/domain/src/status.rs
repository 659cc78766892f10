//! Status snapshot — the wire-level value object reported by the controller.

use serde::{Deserialize, Serialize};

/// Point-in-time state of the light controller.
///
/// Serialized by the daemon on every `GET /api/status` and decoded by the
/// panel on every poll. Transient by design: reconstructed on each poll and
/// discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Whether the light is currently powered.
    pub is_on: bool,
    /// Whether automatic (sensor-driven) mode is active.
    pub auto: bool,
    /// Last light-sensor reading; `None` when no sensor data is available yet.
    pub sensor_value: Option<f64>,
    /// Sensor value at or below which auto mode turns the light on.
    pub darkness_threshold: f64,
}
