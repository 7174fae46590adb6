//! dnssec_audit library: DNSSEC and TXT-marker checks for domain lists
//!
//! This library reads domain names from a CSV export, checks each one for a
//! DNSSEC-validated A record and for a TXT entry carrying a marker prefix, and
//! writes a CSV report with one row per domain.
//!
//! Domains are checked in fixed-size batches with a pause before each batch;
//! within a batch both lookups for every domain run concurrently. A failed
//! lookup never aborts the run, it only turns the corresponding report field
//! negative.
//!
//! # Example
//!
//! ```no_run
//! use dnssec_audit::{Config, run_audit};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("resolve_events.csv"),
//!     output: std::path::PathBuf::from("results.csv"),
//!     batch_size: 100,
//!     ..Default::default()
//! };
//!
//! let report = run_audit(config).await?;
//! println!("{} domains, {} DNSSEC-secure, {} with marker",
//!          report.total_domains, report.dnssec_secure, report.txt_markers);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod dns;
pub mod domain;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod lookup;
mod run;

// Re-export public API
pub use config::{Config, DohEndpoint, LogFormat, LogLevel};
pub use error_handling::{ConfigError, InitializationError, LookupStats, OutcomeType};
pub use run::batch::{partition, run_batches, BatchSettings};
pub use run::{run_audit, run_audit_with, AuditReport};
