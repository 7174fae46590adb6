//! DNS lookups.
//!
//! This module provides the two lookups performed for every domain, each
//! behind a trait so the batch loop can run against any implementation:
//! - DNSSEC-validated A lookups ([`DnssecLookup`])
//! - TXT lookups with marker selection ([`TxtLookup`])
//!
//! The `Hickory*` implementations use `hickory-resolver` over DNS-over-HTTPS.

mod dnssec;
mod records;

// Re-export public API
pub use dnssec::{
    classify_resolve_error, classify_validation_error, reason_chain, DnssecAnswer, DnssecLookup,
    HickoryDnssecLookup, SecurityStatus,
};
pub use records::{first_marker, lookup_txt_records, HickoryTxtLookup, TxtLookup};
