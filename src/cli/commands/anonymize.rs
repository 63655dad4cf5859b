//! Anonymize command implementation
//!
//! Reads the input log, writes the anonymized copy and reports the outcome
//! through the log.

use crate::anonymization::{anonymize_file, AnonymizationConfig, RecordPolicy};
use crate::config::AnonlogConfig;
use crate::log_run_complete;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for an anonymization run
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Input file in delimited format
    #[arg(
        short = 'i',
        long = "input_file",
        visible_alias = "input-file",
        env = "ANONLOG_INPUT_FILE"
    )]
    pub input_file: PathBuf,

    /// Output file, created or truncated
    #[arg(
        short = 'o',
        long = "output_file",
        visible_alias = "output-file",
        env = "ANONLOG_OUTPUT_FILE"
    )]
    pub output_file: PathBuf,

    /// Field delimiter [default: tab]; `\t` stands for a tab
    #[arg(
        short = 'd',
        long,
        env = "ANONLOG_DELIMITER",
        allow_hyphen_values = true
    )]
    pub delimiter: Option<String>,

    /// Abort on records with too few fields instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Seed for the replacement octets, making the run reproducible
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write a JSON run summary to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

impl AnonymizeArgs {
    /// Apply command-line values over the configured ones
    pub fn apply_overrides(&self, config: &mut AnonymizationConfig) {
        if let Some(delimiter) = &self.delimiter {
            config.delimiter = unescape_delimiter(delimiter);
        }
        if self.strict {
            config.record_policy = RecordPolicy::Strict;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
    }

    /// Execute the anonymization run
    pub fn execute(&self, config: &AnonlogConfig) -> anyhow::Result<i32> {
        let anonymization = &config.anonymization;

        tracing::info!("Anonymizing input file: {}", self.input_file.display());
        tracing::info!("Writing output to: {}", self.output_file.display());
        tracing::info!("Delimiter is: {:?}", anonymization.delimiter);
        tracing::debug!(
            record_policy = %anonymization.record_policy,
            seeded = anonymization.seed.is_some(),
            "Starting anonymization"
        );

        let summary = anonymize_file(&self.input_file, &self.output_file, anonymization)
            .with_context(|| format!("Failed to anonymize {}", self.input_file.display()))?;

        if !summary.is_clean() {
            tracing::warn!(
                records_skipped = summary.records_skipped(),
                "Some records were dropped from the output"
            );
        }

        if let Some(report) = &self.report {
            summary
                .write_json(report)
                .context("Failed to write run report")?;
            tracing::info!(report = %report.display(), "Run report written");
        }

        log_run_complete!(summary);
        Ok(0)
    }
}

/// Expand `\t` and `\\` in a delimiter given on the command line
///
/// Any other backslash sequence is kept as typed.
pub fn unescape_delimiter(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
