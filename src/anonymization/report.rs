//! Run summary reporting
//!
//! A [`RunSummary`] counts what happened to every input line of a run. It is
//! logged on completion and can be written out as JSON with `--report`.

use crate::anonymization::engine::SkipReason;
use crate::domain::{AnonError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Counters for one anonymization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Input lines consumed
    pub lines_read: u64,

    /// Anonymized records written
    pub records_written: u64,

    /// Records dropped because the IP field had fewer than four components
    pub malformed_ip_skipped: u64,

    /// Records dropped because they had too few fields
    pub short_records_skipped: u64,

    /// Distinct source addresses in the mapping table
    pub distinct_ips: usize,

    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
}

impl RunSummary {
    /// Create a new empty summary stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            lines_read: 0,
            records_written: 0,
            malformed_ip_skipped: 0,
            short_records_skipped: 0,
            distinct_ips: 0,
            duration_ms: 0,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = duration.as_millis() as u64;
        self
    }

    /// Count a dropped record
    pub fn record_skip(&mut self, reason: &SkipReason) {
        match reason {
            SkipReason::MalformedIp { .. } => self.malformed_ip_skipped += 1,
            SkipReason::TooFewFields { .. } => self.short_records_skipped += 1,
        }
    }

    /// Total records dropped from the output
    pub fn records_skipped(&self) -> u64 {
        self.malformed_ip_skipped + self.short_records_skipped
    }

    /// Whether every input line made it to the output
    pub fn is_clean(&self) -> bool {
        self.records_skipped() == 0
    }

    /// Write the summary as pretty-printed JSON
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json + "\n").map_err(|e| AnonError::io(path, e))
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}
