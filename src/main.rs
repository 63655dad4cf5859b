// anonlog - de-identify usernames and IP addresses in delimited logs
// Copyright (c) 2025 Anonlog Contributors
// Licensed under the GNU General Public License v3.0 or later

use anonlog::cli::Cli;
use anonlog::domain::AnonError;
use anonlog::log_error_with_context;
use anonlog::logging::init_logging;
use clap::Parser;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Resolve configuration before any input or output file is opened
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    };

    let guard = match config
        .application
        .level()
        .and_then(|level| init_logging(level, &config.logging))
    {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(e.exit_code());
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "anonlog");

    let exit_code = match cli.anonymize.execute(&config) {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(format!("{e:#}"), "Anonymization failed");
            e.downcast_ref::<AnonError>()
                .map(AnonError::exit_code)
                .unwrap_or(1)
        }
    };

    // process::exit skips destructors; flush the file log first
    drop(guard);
    process::exit(exit_code);
}
