//! Error type definitions.
//!
//! This module defines the error types and lookup outcome categories used
//! throughout the application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Invalid configuration detected before any lookup runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A batch size of zero would never make progress.
    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    /// No resolvers were configured for TXT lookups.
    #[error("at least one TXT endpoint is required")]
    NoTxtEndpoints,

    /// The column pattern is not a valid regex.
    #[error("invalid column pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The column pattern has nothing to keep.
    #[error("column pattern `{0}` has no capture group")]
    PatternWithoutCapture(String),

    /// An endpoint host is not built in and no addresses were given.
    #[error("unknown DoH endpoint `{0}` (use host=ip[,ip...])")]
    UnknownEndpoint(String),

    /// An endpoint address failed to parse.
    #[error("invalid DoH endpoint address `{0}`")]
    InvalidEndpointAddress(String),
}

/// Per-domain lookup outcome categories.
///
/// Every domain produces exactly one DNSSEC outcome and one TXT outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum OutcomeType {
    /// A lookup validated
    DnssecSecure,
    /// The zone is unsigned
    DnssecInsecure,
    /// Signatures failed to verify
    DnssecBogus,
    /// No verdict, e.g. no A answer
    DnssecIndeterminate,
    /// The A lookup itself failed
    DnssecLookupError,
    /// A TXT entry carried the marker
    TxtMarkerFound,
    /// TXT lookup succeeded without a marker entry
    TxtNoMarker,
    /// The TXT lookup itself failed
    TxtLookupError,
}

impl std::fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OutcomeType {
    /// Human-readable label used in the statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::DnssecSecure => "DNSSEC secure",
            OutcomeType::DnssecInsecure => "DNSSEC insecure (unsigned)",
            OutcomeType::DnssecBogus => "DNSSEC bogus",
            OutcomeType::DnssecIndeterminate => "DNSSEC indeterminate",
            OutcomeType::DnssecLookupError => "DNSSEC lookup error",
            OutcomeType::TxtMarkerFound => "TXT marker found",
            OutcomeType::TxtNoMarker => "TXT marker absent",
            OutcomeType::TxtLookupError => "TXT lookup error",
        }
    }

    /// Whether this outcome counts as a failed lookup rather than a result.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            OutcomeType::DnssecLookupError | OutcomeType::TxtLookupError
        )
    }
}
