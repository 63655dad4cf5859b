//! Main anonymization engine
//!
//! This module provides the [`Anonymizer`] that rewrites delimited log records:
//! the username (field 1) becomes the precomputed hash (field 12) and the IP
//! address (field 5) gets a random last octet, consistent across the run.
//!
//! # Examples
//!
//! ```
//! use anonlog::anonymization::{AnonymizationConfig, Anonymizer};
//!
//! # fn example() -> anonlog::domain::Result<()> {
//! let mut config = AnonymizationConfig::with_delimiter(",");
//! config.seed = Some(7);
//! let mut anonymizer = Anonymizer::new(&config)?;
//!
//! let input = "7,alice,x,x,x,10.0.0.5,x,x,x,x,x,x,HASH\n";
//! let mut output = Vec::new();
//! let summary = anonymizer.process(input.as_bytes(), &mut output)?;
//!
//! assert_eq!(summary.records_written, 1);
//! assert!(String::from_utf8(output).unwrap().starts_with("7,HASH,x,x,x,10.0.0."));
//! # Ok(())
//! # }
//! ```

use crate::anonymization::{
    config::{AnonymizationConfig, RecordPolicy},
    ip::IpAnonymizer,
    report::RunSummary,
};
use crate::domain::{
    AnonError, Record, Result, HASH_FIELD, IP_FIELD, MIN_FIELDS, USERNAME_FIELD,
};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Why a record was left out of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// IP field has fewer than four dot-separated components
    MalformedIp {
        /// Value of field 0
        index: String,
    },
    /// Record is missing the username, IP or hash field
    TooFewFields {
        /// Value of field 0
        index: String,
        /// Number of fields the line split into
        field_count: usize,
    },
}

impl SkipReason {
    /// Field 0 of the skipped record
    pub fn index(&self) -> &str {
        match self {
            SkipReason::MalformedIp { index } | SkipReason::TooFewFields { index, .. } => index,
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MalformedIp { index } => {
                write!(f, "Malformed IP address on line {index}, skipping")
            }
            SkipReason::TooFewFields { index, field_count } => write!(
                f,
                "Record {index} has {field_count} fields, at least {MIN_FIELDS} required, skipping"
            ),
        }
    }
}

/// Result of anonymizing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Rewritten line, delimiter and line terminator preserved
    Anonymized(String),
    /// Record dropped from the output
    Skipped(SkipReason),
}

/// Streaming record anonymizer
///
/// Owns the run's [`IpMappingTable`](crate::anonymization::IpMappingTable);
/// one `Anonymizer` is one run. Records are processed strictly in input order,
/// one line at a time.
pub struct Anonymizer {
    delimiter: String,
    record_policy: RecordPolicy,
    ips: IpAnonymizer,
}

impl Anonymizer {
    /// Create a new anonymizer
    ///
    /// # Errors
    ///
    /// Returns [`AnonError::Configuration`] if the configuration is invalid.
    pub fn new(config: &AnonymizationConfig) -> Result<Self> {
        config.validate()?;

        let ips = match config.seed {
            Some(seed) => IpAnonymizer::with_seed(seed),
            None => IpAnonymizer::new(),
        };

        Ok(Self {
            delimiter: config.delimiter.clone(),
            record_policy: config.record_policy,
            ips,
        })
    }

    /// Anonymize a single line
    ///
    /// `line_number` is the 1-based physical line, used only for errors.
    ///
    /// # Errors
    ///
    /// Returns [`AnonError::MalformedRecord`] for a short record under
    /// [`RecordPolicy::Strict`].
    pub fn anonymize_line(&mut self, line: &str, line_number: u64) -> Result<RecordOutcome> {
        let mut record = Record::split(line, &self.delimiter);
        let index = record.index().to_string();

        if !record.has_required_fields() {
            return match self.record_policy {
                RecordPolicy::Strict => Err(AnonError::MalformedRecord {
                    index,
                    line_number,
                    field_count: record.len(),
                    required: MIN_FIELDS,
                }),
                RecordPolicy::Skip => {
                    let reason = SkipReason::TooFewFields {
                        index,
                        field_count: record.len(),
                    };
                    tracing::warn!(index = %reason.index(), line_number, "{reason}");
                    Ok(RecordOutcome::Skipped(reason))
                }
            };
        }

        // Field 12 may be the last field, so it can carry the line terminator
        let hash = record
            .field(HASH_FIELD)
            .unwrap_or_default()
            .trim_end_matches(['\r', '\n'])
            .to_string();
        let username = record.replace(USERNAME_FIELD, hash.clone());
        tracing::debug!(
            old_username = username.as_deref().unwrap_or_default(),
            new_username = %hash,
            "Replaced username"
        );

        let ip = record.field(IP_FIELD).unwrap_or_default().to_string();
        let Some(anonymized_ip) = self.ips.anonymize(&ip) else {
            let reason = SkipReason::MalformedIp { index };
            tracing::warn!(index = %reason.index(), "{reason}");
            return Ok(RecordOutcome::Skipped(reason));
        };
        tracing::debug!(old_ip = %ip, new_ip = %anonymized_ip, "Replaced IP address");
        record.replace(IP_FIELD, anonymized_ip);

        Ok(RecordOutcome::Anonymized(record.join(&self.delimiter)))
    }

    /// Anonymize every line of `input` into `output`
    ///
    /// Lines are read and written one at a time; nothing beyond the current
    /// line and the mapping table is held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`AnonError::Read`] or [`AnonError::Write`] on stream failure and
    /// [`AnonError::MalformedRecord`] for a short record under strict policy.
    /// Output written before the failure is left in place.
    pub fn process<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<RunSummary> {
        let start = Instant::now();
        let mut summary = RunSummary::new();
        let mut line = String::new();

        loop {
            line.clear();
            let read = input.read_line(&mut line).map_err(AnonError::Read)?;
            if read == 0 {
                break;
            }
            summary.lines_read += 1;

            match self.anonymize_line(&line, summary.lines_read)? {
                RecordOutcome::Anonymized(anonymized) => {
                    output
                        .write_all(anonymized.as_bytes())
                        .map_err(AnonError::Write)?;
                    summary.records_written += 1;
                }
                RecordOutcome::Skipped(reason) => summary.record_skip(&reason),
            }
        }

        output.flush().map_err(AnonError::Write)?;
        summary.distinct_ips = self.ips.table().len();

        Ok(summary.with_duration(start.elapsed()))
    }

    /// Number of distinct addresses mapped so far
    pub fn distinct_ips(&self) -> usize {
        self.ips.table().len()
    }
}

/// Anonymize the file at `input_path` into `output_path`
///
/// Both files are opened before the first line is processed and closed on
/// every exit path. The output file is created or truncated.
///
/// # Errors
///
/// Returns [`AnonError::Io`] naming the path when either file cannot be
/// opened, plus any error from [`Anonymizer::process`].
pub fn anonymize_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &AnonymizationConfig,
) -> Result<RunSummary> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let mut anonymizer = Anonymizer::new(config)?;

    let input = File::open(input_path).map_err(|e| AnonError::io(input_path, e))?;
    let output = File::create(output_path).map_err(|e| AnonError::io(output_path, e))?;

    let _span = tracing::info_span!(
        "anonymize",
        input = %input_path.display(),
        output = %output_path.display()
    )
    .entered();

    anonymizer.process(BufReader::new(input), BufWriter::new(output))
}
