use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::bootstrap::BootstrapConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::query::QueryConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-dig.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-dig/config.toml";

/// Smallest reply buffer that still holds a classic 512-byte UDP message.
const MIN_RECEIVE_BUFFER_SIZE: usize = 512;

/// Main configuration structure for ferrous-dig
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Network exchange settings
    #[serde(default)]
    pub query: QueryConfig,

    /// Resolver used to look up name-server hostnames
    #[serde(default)]
    pub bootstrap: BootstrapConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-dig.toml in current directory
    /// 3. /etc/ferrous-dig/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "query timeout cannot be 0".to_string(),
            ));
        }

        if self.query.receive_buffer_size < MIN_RECEIVE_BUFFER_SIZE {
            return Err(ConfigError::Validation(format!(
                "receive buffer must hold at least {} bytes, got {}",
                MIN_RECEIVE_BUFFER_SIZE, self.query.receive_buffer_size
            )));
        }

        if self.bootstrap.server.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "bootstrap server '{}' must be an IP address",
                self.bootstrap.server
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
}
