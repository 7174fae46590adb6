//! Per-domain lookups.
//!
//! A worker runs both lookups for one domain and returns a [`DomainCheck`]
//! with an explicit outcome for each. The batch loop flattens those into
//! [`DomainRecord`] rows for the report.

mod context;
mod types;
mod worker;

pub use context::LookupContext;
pub use types::{DnssecCheck, DomainCheck, DomainRecord, TxtCheck};
pub use worker::check_domain;

#[cfg(test)]
pub(crate) mod fakes;
