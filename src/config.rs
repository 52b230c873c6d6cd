//! Configuration module for loading and parsing TOML configuration files.

use serde::Deserialize;
use simulator_client::{ClientConfig, DEFAULT_BASE_URL};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulator client configuration.
    pub client: ClientSection,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Simulator client configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientSection {
    /// API base URL including the version prefix.
    pub base_url: String,
    /// Optional request timeout in milliseconds.
    pub timeout_ms: Option<u64>,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides and re-validates.
    ///
    /// # Errors
    /// Returns error if an override produces an invalid value.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        timeout_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(base_url) = base_url {
            self.client.base_url = base_url;
        }
        if timeout_ms.is_some() {
            self.client.timeout_ms = timeout_ms;
        }
        self.validate()?;
        Ok(self)
    }

    /// Client configuration derived from the `[client]` section.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.client.base_url.clone(),
            timeout: self.client.timeout_ms.map(Duration::from_millis),
        }
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.client.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "client.base_url cannot be empty".to_string(),
            ));
        }
        if self.client.timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue(
                "client.timeout_ms must be positive".to_string(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "logging.filter cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
