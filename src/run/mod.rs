//! Audit run orchestration.
//!
//! Wires the pieces together: read domains, check them batch by batch, write
//! the report, print statistics.

pub mod batch;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;

use crate::app::{print_lookup_statistics, print_simple_summary};
use crate::config::Config;
use crate::dns::{DnssecLookup, HickoryDnssecLookup, HickoryTxtLookup, TxtLookup};
use crate::domain::{read_domains_from_path, ColumnExtractor};
use crate::error_handling::{LookupStats, OutcomeType};
use crate::export::{write_report, write_report_to_path};
use crate::initialization::{init_dnssec_resolver, init_txt_resolver};
use crate::lookup::LookupContext;

use batch::{run_batches, BatchSettings};

/// Summary of a completed audit run.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Unique domains read from the input
    pub total_domains: usize,
    /// Number of batches processed
    pub batches: usize,
    /// Domains whose A lookup validated as secure
    pub dnssec_secure: usize,
    /// Domains with a TXT entry carrying the marker
    pub txt_markers: usize,
    /// Lookups that failed outright (DNSSEC and TXT)
    pub lookup_errors: usize,
    /// Where the report was written (`-` for stdout)
    pub output: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs an audit against the configured DNS-over-HTTPS resolvers.
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid
/// - The input file cannot be opened or is not valid CSV
/// - The report cannot be written
///
/// Individual lookup failures are never errors; they show up as negative
/// fields in the report.
///
/// # Example
///
/// ```no_run
/// use dnssec_audit::{run_audit, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     input: PathBuf::from("resolve_events.csv"),
///     ..Default::default()
/// };
/// let report = run_audit(config).await?;
/// println!("{} of {} domains are DNSSEC-secure", report.dnssec_secure, report.total_domains);
/// # Ok(())
/// # }
/// ```
pub async fn run_audit(config: Config) -> Result<AuditReport> {
    let timeout = Duration::from_secs(config.dns_timeout_secs);
    let dnssec = HickoryDnssecLookup::new(init_dnssec_resolver(&config.dnssec_endpoint, timeout));
    let txt = HickoryTxtLookup::new(init_txt_resolver(&config.txt_endpoints, timeout));

    info!(
        "DNSSEC lookups via {}, TXT lookups via {}",
        config.dnssec_endpoint,
        config
            .txt_endpoints
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    run_audit_with(&config, &dnssec, &txt).await
}

/// Runs an audit with caller-supplied lookup implementations.
///
/// Same flow as [`run_audit`]; useful for alternative resolvers and tests.
pub async fn run_audit_with<D, T>(config: &Config, dnssec: &D, txt: &T) -> Result<AuditReport>
where
    D: DnssecLookup,
    T: TxtLookup,
{
    config.validate().context("Invalid configuration")?;
    let extractor = ColumnExtractor::new(config.domain_column, &config.column_pattern)
        .context("Invalid configuration")?;

    let start_time = Instant::now();

    let domains = read_domains_from_path(&config.input, &extractor)?;
    info!("No more rows: {} unique domains to check", domains.len());

    let settings = BatchSettings::from_config(config);
    let batches = batch::partition(&domains, settings.batch_size).len();
    let stats = LookupStats::new();
    let ctx = LookupContext::new(dnssec, txt, &config.txt_marker, &stats);

    let records = run_batches(&domains, settings, ctx).await;

    let written = if config.writes_to_stdout() {
        write_report(std::io::stdout().lock(), &records)?
    } else {
        write_report_to_path(&config.output, &records)?
    };
    info!("Wrote {} rows to {}", written, config.output.display());

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    let dnssec_secure = stats.get(OutcomeType::DnssecSecure);
    let txt_markers = stats.get(OutcomeType::TxtMarkerFound);

    print_lookup_statistics(&stats);
    print_simple_summary(domains.len(), dnssec_secure, txt_markers, elapsed_seconds);

    Ok(AuditReport {
        total_domains: domains.len(),
        batches,
        dnssec_secure,
        txt_markers,
        lookup_errors: stats.total_errors(),
        output: config.output.clone(),
        elapsed_seconds,
    })
}
