//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BATCH_DELAY_MS, DEFAULT_BATCH_SIZE, DEFAULT_COLUMN_PATTERN, DEFAULT_DNSSEC_ENDPOINT,
    DEFAULT_DOMAIN_COLUMN, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_TXT_ENDPOINTS,
    DEFAULT_TXT_MARKER, DNS_TIMEOUT_SECS,
};
use crate::config::endpoint::DohEndpoint;
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Audit configuration.
///
/// Parsed from the command line by the binary, or built directly by library
/// callers.
///
/// # Examples
///
/// ```no_run
/// use dnssec_audit::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("resolve_events.csv"),
///     batch_size: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dnssec_audit",
    about = "Checks domains from a CSV export for DNSSEC validation and TXT markers."
)]
pub struct Config {
    /// CSV file to read domains from
    #[arg(value_parser, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Report file to write (`-` for stdout)
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Maximum number of domains looked up concurrently
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Delay before each batch, in milliseconds
    #[arg(long, default_value_t = DEFAULT_BATCH_DELAY_MS)]
    pub batch_delay_ms: u64,

    /// Zero-based column holding the domain
    #[arg(long, default_value_t = DEFAULT_DOMAIN_COLUMN)]
    pub domain_column: usize,

    /// Regex stripped from the domain column; capture group 1 is kept
    #[arg(long, default_value = DEFAULT_COLUMN_PATTERN)]
    pub column_pattern: String,

    /// Prefix a TXT entry must start with to be reported
    #[arg(long, default_value = DEFAULT_TXT_MARKER)]
    pub txt_marker: String,

    /// DoH server used for DNSSEC-validated A lookups (`host` or `host=ip,ip`)
    #[arg(long, default_value = DEFAULT_DNSSEC_ENDPOINT)]
    pub dnssec_endpoint: DohEndpoint,

    /// DoH server used for TXT lookups; repeat for more than one
    #[arg(
        long = "txt-endpoint",
        default_values_t = default_txt_endpoints()
    )]
    pub txt_endpoints: Vec<DohEndpoint>,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

fn default_txt_endpoints() -> Vec<DohEndpoint> {
    DEFAULT_TXT_ENDPOINTS
        .iter()
        .filter_map(|host| DohEndpoint::builtin(host))
        .collect()
}

impl Config {
    /// Rejects settings the batch loop cannot run with.
    ///
    /// The column pattern is checked separately when the extractor is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }
        if self.txt_endpoints.is_empty() {
            return Err(ConfigError::NoTxtEndpoints);
        }
        Ok(())
    }

    /// Whether the report goes to stdout.
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
            domain_column: DEFAULT_DOMAIN_COLUMN,
            column_pattern: DEFAULT_COLUMN_PATTERN.to_string(),
            txt_marker: DEFAULT_TXT_MARKER.to_string(),
            dnssec_endpoint: DohEndpoint::builtin(DEFAULT_DNSSEC_ENDPOINT).unwrap_or(DohEndpoint {
                host: DEFAULT_DNSSEC_ENDPOINT.to_string(),
                addrs: Vec::new(),
            }),
            txt_endpoints: default_txt_endpoints(),
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
