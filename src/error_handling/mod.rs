//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and configuration
//! - Lookup outcome categories
//! - Outcome statistics tracking

mod stats;
mod types;

// Re-export public API
pub use stats::LookupStats;
pub use types::{ConfigError, InitializationError, OutcomeType};
