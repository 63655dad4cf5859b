//! Configuration loader with TOML parsing

use super::schema::AnonlogConfig;
use crate::domain::errors::AnonError;
use crate::domain::result::Result;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Parses the TOML into [`AnonlogConfig`], filling defaults for absent keys
/// 3. Validates the configuration
///
/// # Errors
///
/// Returns [`AnonError::Configuration`] if the file is missing or unreadable,
/// the TOML does not parse, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use anonlog::config::loader::load_config;
///
/// let config = load_config("anonlog.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AnonlogConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AnonError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AnonError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config: AnonlogConfig = toml::from_str(&contents)?;

    config.validate().map_err(|e| {
        AnonError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file() {
        let err = load_config("/nonexistent/anonlog.toml").unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[anonymization]\ndelimiter = \"|\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.anonymization.delimiter, "|");
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[anonymization\ndelimiter = ").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_load_fails_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[anonymization]\ndelimiter = \"\"").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }
}
