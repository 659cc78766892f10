//! Events — immutable records of controller state changes.
//!
//! Events are produced when the light switches, the control mode changes,
//! or the darkness threshold is updated. They exist so the daemon can log
//! every transition; nothing is persisted.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamp attached to every event.
pub type Timestamp = DateTime<Utc>;

/// Unique identifier for an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(uuid::Uuid);

impl Default for EventId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl EventId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(self) -> uuid::Uuid {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

/// What caused a light switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchCause {
    /// The auto-mode loop reacted to a sensor reading.
    Auto,
    /// A user issued a direct command.
    Manual,
}

/// The state change an event records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// The light was switched on or off.
    LightSwitched { on: bool, cause: SwitchCause },
    /// Automatic mode was enabled or disabled.
    ModeChanged { auto: bool },
    /// The darkness threshold was updated.
    ThresholdChanged { threshold: f64 },
}

/// An immutable record of a single state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// The recorded state change.
    pub kind: EventKind,
    /// When the change happened.
    pub timestamp: Timestamp,
}

impl Event {
    /// Record a state change happening now.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: EventId::new(),
            kind,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LightSwitched {
                on: true,
                cause: SwitchCause::Auto,
            } => f.write_str("light switched on (auto)"),
            Self::LightSwitched {
                on: false,
                cause: SwitchCause::Auto,
            } => f.write_str("light switched off (auto)"),
            Self::LightSwitched {
                on: true,
                cause: SwitchCause::Manual,
            } => f.write_str("light switched on (manual)"),
            Self::LightSwitched {
                on: false,
                cause: SwitchCause::Manual,
            } => f.write_str("light switched off (manual)"),
            Self::ModeChanged { auto: true } => f.write_str("auto mode enabled"),
            Self::ModeChanged { auto: false } => f.write_str("auto mode disabled"),
            Self::ThresholdChanged { threshold } => {
                write!(f, "darkness threshold set to {threshold}")
            }
        }
    }
}
