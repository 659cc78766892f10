//! Daemon configuration.
//!
//! Settings come from `lumo.toml` in the working directory when it exists,
//! with `LUMO_*` environment variables layered on top. Everything defaults,
//! so a bare `lumod` starts a virtual light on port 8000.

use chrono::NaiveTime;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Auto-mode controller.
    pub controller: ControllerConfig,
    /// Ambient sensor selection.
    pub sensor: SensorConfig,
    /// Log filtering.
    pub logging: LoggingConfig,
}

/// Where the HTTP server listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Auto-mode controller settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Seconds between auto-mode evaluations.
    pub poll_interval_secs: u64,
    /// Starting darkness threshold, clamped into `[0, 1]` at startup.
    pub darkness_threshold: f64,
    /// Whether auto mode starts enabled.
    pub auto: bool,
}

/// Which virtual sensor gets wired in.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Sensor flavour.
    pub kind: SensorKind,
    /// Start of the dark window (`HH:MM`), used by `time_of_day`.
    pub evening: String,
    /// End of the dark window (`HH:MM`), used by `time_of_day`.
    pub morning: String,
    /// Constant reading, used by `fixed`.
    pub level: f64,
}

/// Supported sensor flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    /// Darkness derived from the wall clock.
    TimeOfDay,
    /// Constant reading.
    Fixed,
}

/// Log filtering, `RUST_LOG` directive syntax.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive.
    pub filter: String,
}

impl Config {
    /// Read `lumo.toml` when present, layer environment overrides on top,
    /// and validate the result.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed, or when a
    /// setting is semantically invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("lumo.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        let var = |name: &str| std::env::var(name).ok();

        if let Some(host) = var("LUMO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("LUMO_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(bind) = var("LUMO_BIND") {
            if let Some((host, port)) = bind.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(secs) = var("LUMO_POLL_INTERVAL").and_then(|v| v.parse().ok()) {
            self.controller.poll_interval_secs = secs;
        }
        if let Some(threshold) = var("LUMO_DARKNESS_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.controller.darkness_threshold = threshold;
        }
        // RUST_LOG wins over both the file and LUMO_LOG.
        if let Some(filter) = var("RUST_LOG").or_else(|| var("LUMO_LOG")) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".into()));
        }
        if self.controller.poll_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be at least one second".into(),
            ));
        }
        if !self.controller.darkness_threshold.is_finite() {
            return Err(ConfigError::Validation(
                "darkness threshold must be a finite number".into(),
            ));
        }
        if self.sensor.kind == SensorKind::TimeOfDay {
            self.sensor.dark_window()?;
        }
        Ok(())
    }

    /// The `host:port` pair the listener binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl SensorConfig {
    /// Parse the configured dark window bounds.
    ///
    /// # Errors
    ///
    /// Fails when either bound is not `HH:MM`.
    pub fn dark_window(&self) -> Result<(NaiveTime, NaiveTime), ConfigError> {
        let evening = parse_time("sensor.evening", &self.evening)?;
        let morning = parse_time("sensor.morning", &self.morning)?;
        Ok((evening, morning))
    }
}

fn parse_time(field: &str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| ConfigError::Validation(format!("{field} must be HH:MM, got {value:?}")))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 5,
            darkness_threshold: 0.3,
            auto: true,
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            kind: SensorKind::TimeOfDay,
            evening: "21:00".to_string(),
            morning: "06:00".to_string(),
            level: 0.5,
        }
    }
}

impl Default for SensorKind {
    fn default() -> Self {
        Self::TimeOfDay
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "lumod=info,lumo=info,tower_http=debug".to_string(),
        }
    }
}

/// Why configuration loading failed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file was not valid TOML.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// The file exists but could not be read.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A setting failed semantic validation.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.controller.poll_interval_secs, 5);
        assert!((config.controller.darkness_threshold - 0.3).abs() < f64::EPSILON);
        assert!(config.controller.auto);
        assert_eq!(config.sensor.kind, SensorKind::TimeOfDay);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_treat_empty_file_as_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_parse_every_section() {
        let content = "
            [server]
            host = 'localhost'
            port = 8123

            [controller]
            poll_interval_secs = 2
            darkness_threshold = 0.45
            auto = false

            [sensor]
            kind = 'fixed'
            level = 0.8

            [logging]
            filter = 'lumod=debug'
        ";
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.bind_addr(), "localhost:8123");
        assert_eq!(config.controller.poll_interval_secs, 2);
        assert!((config.controller.darkness_threshold - 0.45).abs() < f64::EPSILON);
        assert!(!config.controller.auto);
        assert_eq!(config.sensor.kind, SensorKind::Fixed);
        assert!((config.sensor.level - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.logging.filter, "lumod=debug");
    }

    #[test]
    fn should_fill_missing_sections_with_defaults() {
        let content = "
            [controller]
            darkness_threshold = 0.6
        ";
        let config: Config = toml::from_str(content).unwrap();
        assert!((config.controller.darkness_threshold - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.sensor.evening, "21:00");
    }

    #[test]
    fn should_fall_back_to_defaults_when_file_missing() {
        let config = Config::from_file("does-not-exist.toml").unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_poll_interval() {
        let mut config = Config::default();
        config.controller.poll_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_non_finite_threshold() {
        let mut config = Config::default();
        config.controller.darkness_threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_malformed_dark_window() {
        let mut config = Config::default();
        config.sensor.evening = "late".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_skip_window_validation_for_fixed_sensor() {
        let mut config = Config::default();
        config.sensor.kind = SensorKind::Fixed;
        config.sensor.evening = "late".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_dark_window_bounds() {
        let (evening, morning) = Config::default().sensor.dark_window().unwrap();
        assert_eq!(evening, NaiveTime::from_hms_opt(21, 0, 0).unwrap());
        assert_eq!(morning, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    }

    #[test]
    fn should_report_parse_error_for_broken_toml() {
        assert!(toml::from_str::<Config>("server = 'nope").is_err());
    }
}
