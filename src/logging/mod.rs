//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - The five run log levels ([`LogLevel`])
//! - Human-readable console output on stderr
//! - Optional local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use anonlog::logging::{init_logging, LogLevel};
//! use anonlog::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging(LogLevel::Debug, &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod level;
pub mod structured;

// Re-export commonly used items
pub use level::LogLevel;
pub use structured::{init_logging, LoggingGuard};

/// Log the summary of a finished run
///
/// # Example
///
/// ```no_run
/// use anonlog::log_run_complete;
/// use anonlog::anonymization::RunSummary;
///
/// let summary = RunSummary::new();
/// log_run_complete!(&summary);
/// ```
#[macro_export]
macro_rules! log_run_complete {
    ($summary:expr) => {
        tracing::info!(
            lines_read = $summary.lines_read,
            records_written = $summary.records_written,
            malformed_ip_skipped = $summary.malformed_ip_skipped,
            short_records_skipped = $summary.short_records_skipped,
            distinct_ips = $summary.distinct_ips,
            duration_ms = $summary.duration_ms,
            "Anonymization complete"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use anonlog::log_error_with_context;
/// use anonlog::domain::AnonError;
///
/// let error = AnonError::Configuration("Invalid delimiter".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
