//! Anonymization configuration

use crate::domain::{AnonError, Result};
use serde::{Deserialize, Serialize};

/// Default field separator
pub const DEFAULT_DELIMITER: &str = "\t";

/// What to do with a record that has fewer fields than the anonymizer reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordPolicy {
    /// Log a warning, drop the record and continue
    #[default]
    Skip,
    /// Abort the run with [`AnonError::MalformedRecord`]
    Strict,
}

impl std::fmt::Display for RecordPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordPolicy::Skip => write!(f, "skip"),
            RecordPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Settings for one anonymization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Field separator used to split input and join output
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Handling of records too short for the username, IP and hash fields
    #[serde(default)]
    pub record_policy: RecordPolicy,

    /// Seed for the last-octet generator; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            record_policy: RecordPolicy::default(),
            seed: None,
        }
    }
}

impl AnonymizationConfig {
    /// Config with a specific delimiter and defaults otherwise
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(AnonError::Configuration(
                "Delimiter must not be empty".to_string(),
            ));
        }
        if self.delimiter.contains(['\n', '\r']) {
            return Err(AnonError::Configuration(format!(
                "Delimiter {:?} must not contain a line terminator",
                self.delimiter
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnonymizationConfig::default();
        assert_eq!(config.delimiter, "\t");
        assert_eq!(config.record_policy, RecordPolicy::Skip);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let config = AnonymizationConfig::with_delimiter("");
        assert!(matches!(
            config.validate(),
            Err(AnonError::Configuration(_))
        ));
    }

    #[test]
    fn test_newline_delimiter_rejected() {
        assert!(AnonymizationConfig::with_delimiter("\n").validate().is_err());
        assert!(AnonymizationConfig::with_delimiter(",\r").validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AnonymizationConfig = toml::from_str("record_policy = \"strict\"").unwrap();
        assert_eq!(config.delimiter, "\t");
        assert_eq!(config.record_policy, RecordPolicy::Strict);
    }
}
