// anonlog - de-identify usernames and IP addresses in delimited logs
// Copyright (c) 2025 Anonlog Contributors
// Licensed under the GNU General Public License v3.0 or later

//! # anonlog - access log de-identification
//!
//! anonlog reads a delimited log file and writes a copy in which two
//! identifying fields are replaced, keeping every other field and the line
//! structure intact. It prepares access logs for sharing outside the
//! organisation that collected them.
//!
//! ## Overview
//!
//! For every record (one input line split on the delimiter):
//! - the **username** (field 1) is replaced by the precomputed hash in field 12
//! - the **IP address** (field 5) keeps its first three octets and gets a
//!   random last octet in `[1, 254]`, identical for every occurrence of that
//!   address within a run
//!
//! Records whose IP field is malformed are dropped with a warning.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - The anonymizer engine, IP mapping and run summary
//! - [`domain`] - Records, field positions and error types
//! - [`config`] - Optional TOML configuration
//! - [`logging`] - Log levels and tracing setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use anonlog::anonymization::{anonymize_file, AnonymizationConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AnonymizationConfig::with_delimiter(",");
//!     let summary = anonymize_file("access.csv", "access.anon.csv", &config)?;
//!
//!     println!("Wrote {} records", summary.records_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming
//!
//! [`anonymization::Anonymizer::process`] works on any `BufRead`/`Write` pair
//! and holds one line at a time:
//!
//! ```rust
//! use anonlog::anonymization::{AnonymizationConfig, Anonymizer};
//!
//! # fn example() -> anonlog::domain::Result<()> {
//! let mut anonymizer = Anonymizer::new(&AnonymizationConfig::default())?;
//! let mut output = Vec::new();
//! anonymizer.process("1\tu\tx\tx\tx\t10.1.2.3\tx\tx\tx\tx\tx\tx\th\n".as_bytes(), &mut output)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`] with [`domain::AnonError`];
//! each variant maps to a process exit code via
//! [`AnonError::exit_code`](domain::AnonError::exit_code).

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
