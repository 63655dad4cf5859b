//! Configuration schema types

use crate::anonymization::AnonymizationConfig;
use crate::domain::Result;
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};

/// Root configuration structure that maps to the TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonlogConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Record rewriting settings
    #[serde(default)]
    pub anonymization: AnonymizationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AnonlogConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::AnonError::Configuration`] for the first invalid value
    pub fn validate(&self) -> Result<()> {
        self.application.validate()?;
        self.anonymization.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    /// Parsed log level
    pub fn level(&self) -> Result<LogLevel> {
        self.log_level.parse()
    }

    fn validate(&self) -> Result<()> {
        self.level().map(|_| ())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        crate::logging::structured::parse_rotation(&self.local_rotation)?;
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err(crate::domain::AnonError::Configuration(
                "logging.local_path must not be empty when local logging is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
