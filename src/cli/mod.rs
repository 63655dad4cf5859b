//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for anonlog using clap.

pub mod commands;

use crate::config::{load_config, AnonlogConfig};
use crate::domain::Result;
use clap::Parser;
use std::path::PathBuf;

/// anonlog - de-identify usernames and IP addresses in delimited logs
#[derive(Parser, Debug)]
#[command(name = "anonlog")]
#[command(version, about, long_about = None)]
#[command(author = "Anonlog Contributors")]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "ANONLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (DEBUG, INFO, WARNING, ERROR, CRITICAL) [default: INFO]
    #[arg(short = 'l', long = "log", env = "ANONLOG_LOG")]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub anonymize: commands::anonymize::AnonymizeArgs,
}

impl Cli {
    /// Build the effective configuration
    ///
    /// Starts from the configuration file when one is given (built-in defaults
    /// otherwise) and applies command-line and environment overrides on top.
    /// No input or output file is touched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::AnonError::Configuration`] for an unreadable
    /// configuration file, an invalid log level or an invalid delimiter.
    pub fn resolve_config(&self) -> Result<AnonlogConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => AnonlogConfig::default(),
        };

        if let Some(level) = &self.log_level {
            config.application.log_level = level.clone();
        }
        self.anonymize.apply_overrides(&mut config.anonymization);

        config.validate()?;
        Ok(config)
    }
}
