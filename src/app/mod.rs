//! Main application modules.
//!
//! This module provides progress logging and statistics printing used by the
//! audit run.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{print_lookup_statistics, print_simple_summary};
