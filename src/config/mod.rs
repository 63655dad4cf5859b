//! Configuration management for anonlog.
//!
//! Every setting has a built-in default, so a configuration file is optional.
//! When one is given with `--config`, it is read as TOML and validated; values
//! from the command line or `ANONLOG_*` environment variables take precedence.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "INFO"
//!
//! [anonymization]
//! delimiter = "\t"
//! record_policy = "skip"   # or "strict"
//! # seed = 42
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use anonlog::config::load_config;
//!
//! # fn example() {
//! match load_config("anonlog.toml") {
//!     Ok(config) => println!("Delimiter: {:?}", config.anonymization.delimiter),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{AnonlogConfig, ApplicationConfig, LoggingConfig};
