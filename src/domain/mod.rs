//! Domain types for anonlog.
//!
//! The domain layer provides:
//! - **Records** ([`Record`]) split from one delimited log line, with the
//!   field positions the anonymizer reads and rewrites
//! - **Error types** ([`AnonError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use anonlog::domain::{Record, USERNAME_FIELD};
//!
//! let record = Record::split("7,alice,x", ",");
//! assert_eq!(record.field(USERNAME_FIELD), Some("alice"));
//! assert_eq!(record.index(), "7");
//! ```

pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::AnonError;
pub use record::{Record, HASH_FIELD, INDEX_FIELD, IP_FIELD, MIN_FIELDS, USERNAME_FIELD};
pub use result::Result;
