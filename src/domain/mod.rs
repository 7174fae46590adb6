//! Domain extraction from CSV exports.
//!
//! Each input row carries the queried name in a fixed column, wrapped in a
//! stringified list such as `['example.com','TXT']`. This module pulls that
//! column out, strips the wrapper, keeps values that look like domain names,
//! and deduplicates across the whole file.
//!
//! Key items:
//! - [`ColumnExtractor`] - column position plus wrapper pattern
//! - [`is_candidate_domain()`] - the acceptance rule for a stripped value
//! - [`read_domains()`] - consumes a CSV stream into a unique domain list

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ByteRecord, ReaderBuilder, Trim};
use log::{debug, info};
use regex::Regex;

use crate::error_handling::ConfigError;

/// Locates and unwraps the domain field of an input row.
#[derive(Debug, Clone)]
pub struct ColumnExtractor {
    column: usize,
    pattern: Regex,
}

impl ColumnExtractor {
    /// Builds an extractor for `column` (zero-based) and a wrapper `pattern`.
    ///
    /// The first match of `pattern` in the field is replaced by its first
    /// capture group; text outside the match is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the pattern does not compile
    /// and [`ConfigError::PatternWithoutCapture`] if it has no capture group.
    pub fn new(column: usize, pattern: &str) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern)?;
        // captures_len counts the implicit whole-match group
        if pattern.captures_len() < 2 {
            return Err(ConfigError::PatternWithoutCapture(pattern.to_string()));
        }
        Ok(Self { column, pattern })
    }

    /// Column this extractor reads.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Strips the wrapper from a raw field value.
    pub fn strip(&self, raw: &str) -> String {
        self.pattern.replace(raw, "$1").into_owned()
    }

    /// Extracts the candidate domain from a row.
    ///
    /// Invalid UTF-8 in the field is replaced rather than rejected. Returns
    /// `None` when the row is too short or the stripped value is not a
    /// candidate domain.
    pub fn extract(&self, record: &ByteRecord) -> Option<String> {
        let raw = String::from_utf8_lossy(record.get(self.column)?);
        let domain = self.strip(&raw);
        is_candidate_domain(&domain).then_some(domain)
    }
}

/// A value is accepted as a domain if it contains a dot, neither starts nor
/// ends with one, and contains no `@`.
pub fn is_candidate_domain(value: &str) -> bool {
    value.contains('.') && !value.starts_with('.') && !value.ends_with('.') && !value.contains('@')
}

/// Reads every row of a CSV stream and returns the unique candidate domains.
///
/// The stream has no header row. Fields are trimmed and rows may differ in
/// length; rows too short to hold the domain column are skipped. Bytes that
/// are not valid UTF-8 are replaced, so other columns never stop the read.
/// Domains are returned in first-seen order.
///
/// # Errors
///
/// Any I/O or CSV syntax error aborts the read.
pub fn read_domains<R: Read>(reader: R, extractor: &ColumnExtractor) -> Result<Vec<String>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut domains = Vec::new();
    let mut rows = 0usize;
    let mut short_rows = 0usize;
    let mut rejected = 0usize;

    for (index, record) in csv_reader.byte_records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV row {}", index + 1))?;
        rows += 1;

        if record.len() <= extractor.column() {
            short_rows += 1;
            debug!(
                "Row {} has {} fields, no column {}",
                index + 1,
                record.len(),
                extractor.column()
            );
            continue;
        }

        match extractor.extract(&record) {
            Some(domain) => {
                if seen.insert(domain.clone()) {
                    domains.push(domain);
                }
            }
            None => rejected += 1,
        }
    }

    info!(
        "Read {} rows: {} unique domains, {} rejected values, {} short rows",
        rows,
        domains.len(),
        rejected,
        short_rows
    );

    Ok(domains)
}

/// Opens `path` and reads its domains with [`read_domains()`].
pub fn read_domains_from_path(path: &Path, extractor: &ColumnExtractor) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    read_domains(file, extractor)
        .with_context(|| format!("Failed to read domains from {}", path.display()))
}
