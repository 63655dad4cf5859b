//! Domain error types
//!
//! This module defines the error hierarchy for anonlog. Every fatal condition of
//! a run maps onto one [`AnonError`] variant; recoverable per-record problems are
//! reported through [`crate::anonymization::RecordOutcome`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main anonlog error type
#[derive(Debug, Error)]
pub enum AnonError {
    /// Invalid log level, delimiter or configuration file
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input or output file could not be opened
    #[error("I/O error on {}", path.display())]
    Io {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Reading from the input stream failed mid-run
    #[error("Failed to read input")]
    Read(#[source] std::io::Error),

    /// Writing to the output stream failed mid-run
    #[error("Failed to write output")]
    Write(#[source] std::io::Error),

    /// Record too short to hold the username, IP and hash fields
    #[error(
        "Malformed record {index} on line {line_number}: {field_count} fields, at least {required} required"
    )]
    MalformedRecord {
        /// Value of field 0
        index: String,
        /// Physical line number, starting at 1
        line_number: u64,
        /// Number of fields the line split into
        field_count: usize,
        /// Minimum number of fields
        required: usize,
    },

    /// Run report could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AnonError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AnonError::Configuration(_) => 2,
            AnonError::Io { .. } | AnonError::Read(_) | AnonError::Write(_) => 3,
            AnonError::MalformedRecord { .. } => 4,
            AnonError::Serialization(_) => 1,
        }
    }

    /// Wrap an open/create failure with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnonError::Io {
            path: path.into(),
            source,
        }
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for AnonError {
    fn from(err: serde_json::Error) -> Self {
        AnonError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for AnonError {
    fn from(err: toml::de::Error) -> Self {
        AnonError::Configuration(format!("TOML parse error: {err}"))
    }
}
