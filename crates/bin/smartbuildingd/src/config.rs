//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smartbuilding.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;
use smartbuilding_adapter_virtual::VirtualConfig;
use smartbuilding_domain::state::OperatingState;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Building identity and initial state.
    pub building: BuildingConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Shape of the simulated building.
    pub devices: VirtualConfig,
}

/// Building settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildingConfig {
    /// Building identifier (stored lowercase).
    pub id: String,
    /// Normal state the controller starts in.
    pub start_state: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `smartbuilding.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("smartbuilding.toml")?;
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
        if let Ok(val) = std::env::var("SMARTBUILDING_ID") {
            self.building.id = val;
        }
        if let Ok(val) = std::env::var("SMARTBUILDING_START_STATE") {
            self.building.start_state = val;
        }
        if let Ok(val) = std::env::var("SMARTBUILDING_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.start_state()?;
        if self.devices.doors == 0 || self.devices.lights == 0 || self.devices.detectors == 0 {
            return Err(ConfigError::Validation(
                "doors, lights and detectors must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured start state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if it is not a normal state.
    pub fn start_state(&self) -> Result<OperatingState, ConfigError> {
        OperatingState::parse_start(Some(&self.building.start_state))
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            id: "building".to_string(),
            start_state: OperatingState::OutOfHours.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smartbuildingd=info,smartbuilding=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.building.id, "building");
        assert_eq!(config.building.start_state, "out of hours");
        assert_eq!(config.devices, VirtualConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.building.id, "building");
        assert_eq!(config.start_state().unwrap(), OperatingState::OutOfHours);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [building]
            id = 'HQ'
            start_state = 'Open'

            [logging]
            filter = 'debug'

            [devices]
            doors = 4
            lights = 6
            detectors = 2
            faulty_doors = [1]
            alerts_online = false
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.building.id, "HQ");
        assert_eq!(config.start_state().unwrap(), OperatingState::Open);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.devices.doors, 4);
        assert_eq!(config.devices.lights, 6);
        assert_eq!(config.devices.detectors, 2);
        assert_eq!(config.devices.faulty_doors, vec![1]);
        assert!(!config.devices.alerts_online);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.building.id, "building");
    }

    #[test]
    fn should_reject_emergency_start_state() {
        let mut config = Config::default();
        config.building.start_state = "fire drill".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("'open', 'closed', 'out of hours'"));
    }

    #[test]
    fn should_reject_empty_device_bank() {
        let mut config = Config::default();
        config.devices.lights = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
