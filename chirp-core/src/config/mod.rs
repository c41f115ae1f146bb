//! Configuration management for Chirp
//!
//! This module provides environment-based configuration management with
//! support for defaults and validation.

use serde::{Deserialize, Serialize};
use std::env;

mod error;

pub use error::ConfigError;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store configuration
    pub store: StoreConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Capacity of the change-event broadcast channel
    pub event_capacity: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON formatting
    pub json_format: bool,

    /// Include timestamps
    pub with_timestamp: bool,

    /// Include target module
    pub with_target: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            event_capacity: 256,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            with_timestamp: true,
            with_target: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables follow the pattern: CHIRP_<SECTION>_<KEY>
    /// Example: CHIRP_STORE_EVENT_CAPACITY=512
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(capacity) = env::var("CHIRP_STORE_EVENT_CAPACITY") {
            config.store.event_capacity = capacity.parse().map_err(|e| {
                ConfigError::InvalidValue(format!("Invalid event capacity: {}", e))
            })?;
        }

        if let Ok(level) = env::var("CHIRP_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(json) = env::var("CHIRP_LOG_JSON") {
            config.logging.json_format = json
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid JSON flag: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.event_capacity == 0 {
            return Err(ConfigError::ValidationFailed(
                "store.event_capacity must be greater than zero".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationFailed(format!(
                "Unknown log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}
