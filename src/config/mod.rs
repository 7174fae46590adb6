//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, built-in DoH hosts)
//! - CLI option types and parsing
//! - DoH endpoint parsing

mod constants;
mod endpoint;
mod types;

// Re-export all constants
pub use constants::*;
pub use endpoint::DohEndpoint;
pub use types::{Config, LogFormat, LogLevel};
