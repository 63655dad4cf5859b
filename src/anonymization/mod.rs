//! Anonymization of delimited access logs
//!
//! Each record has two identifying fields rewritten:
//! - **Username** (field 1) is replaced by the precomputed hash in field 12
//! - **IP address** (field 5) keeps its first three octets and gets a random
//!   last octet, the same one for every occurrence of that address in a run
//!
//! Records whose IP field does not split into four octets are dropped with a
//! warning. Records too short to carry fields 1, 5 and 12 are dropped or abort
//! the run depending on [`RecordPolicy`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use anonlog::anonymization::{anonymize_file, AnonymizationConfig};
//!
//! # fn example() -> anonlog::domain::Result<()> {
//! let config = AnonymizationConfig::default();
//! let summary = anonymize_file("access.tsv", "access.anon.tsv", &config)?;
//! println!("{} records written", summary.records_written);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod ip;
pub mod report;

// Re-export main types
pub use config::{AnonymizationConfig, RecordPolicy, DEFAULT_DELIMITER};
pub use engine::{anonymize_file, Anonymizer, RecordOutcome, SkipReason};
pub use ip::{IpAnonymizer, IpMappingTable};
pub use report::RunSummary;
