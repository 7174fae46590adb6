//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dnssec_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dnssec_audit::initialization::init_logger_with;
use dnssec_audit::{run_audit, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let to_stdout = config.writes_to_stdout();

    match run_audit(config).await {
        Ok(report) => {
            // Keep stdout clean when it carries the report
            if !to_stdout {
                println!(
                    "✅ Checked {} domain{} in {} batch{} ({} DNSSEC-secure, {} with TXT marker, {} failed lookups) in {:.1}s",
                    report.total_domains,
                    if report.total_domains == 1 { "" } else { "s" },
                    report.batches,
                    if report.batches == 1 { "" } else { "es" },
                    report.dnssec_secure,
                    report.txt_markers,
                    report.lookup_errors,
                    report.elapsed_seconds
                );
                println!("Results saved in {}", report.output.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("dnssec_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
