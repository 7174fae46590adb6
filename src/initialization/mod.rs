//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - DNSSEC-validating resolver for A lookups
//! - Resolver pool for TXT lookups

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{init_dnssec_resolver, init_txt_resolver};
