//! CSV report writer.
//!
//! One row per checked domain under the header `Domain,DNSSEC,TXTRecord`.

use anyhow::{Context, Result};
use ::csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::REPORT_HEADER;
use crate::lookup::DomainRecord;

/// Writes the report to any sink.
///
/// `DNSSEC` is `true` or `false`; `TXTRecord` is empty when no marker was
/// found.
///
/// # Returns
///
/// The number of data rows written.
pub fn write_report<W: Write>(sink: W, records: &[DomainRecord]) -> Result<usize> {
    let mut writer = Writer::from_writer(sink);

    writer.write_record(REPORT_HEADER)?;
    for record in records {
        writer.write_record([
            record.domain.as_str(),
            if record.dnssec_secure { "true" } else { "false" },
            record.txt_marker.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush().context("Failed to flush report")?;

    Ok(records.len())
}

/// Creates (or truncates) `path` and writes the report to it.
pub fn write_report_to_path(path: &Path, records: &[DomainRecord]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_report(file, records)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}
