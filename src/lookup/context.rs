//! Shared resources for per-domain lookups.

use crate::dns::{DnssecLookup, TxtLookup};
use crate::error_handling::LookupStats;

/// Everything a lookup worker needs besides the domain itself.
///
/// Borrowed for the duration of a run; every future of a batch holds the
/// same context.
pub struct LookupContext<'a, D, T> {
    /// DNSSEC-validated A lookups
    pub dnssec: &'a D,
    /// TXT lookups
    pub txt: &'a T,
    /// Prefix a TXT entry must start with
    pub marker: &'a str,
    /// Outcome counters
    pub stats: &'a LookupStats,
}

impl<'a, D: DnssecLookup, T: TxtLookup> LookupContext<'a, D, T> {
    /// Bundles the lookups, marker prefix and counters.
    pub fn new(dnssec: &'a D, txt: &'a T, marker: &'a str, stats: &'a LookupStats) -> Self {
        Self {
            dnssec,
            txt,
            marker,
            stats,
        }
    }
}

// Derived impls would bound D and T by Clone
impl<D, T> Clone for LookupContext<'_, D, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, T> Copy for LookupContext<'_, D, T> {}
