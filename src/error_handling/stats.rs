//! Lookup outcome statistics.
//!
//! Counters are shared by every lookup future of a batch, so they are updated
//! through `&self` with atomics.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::OutcomeType;

/// Per-outcome counters for a whole audit run.
///
/// All outcome types are initialized to zero on creation.
pub struct LookupStats {
    outcomes: HashMap<OutcomeType, AtomicUsize>,
}

impl LookupStats {
    /// Creates counters for every outcome, all at zero.
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in OutcomeType::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }
        LookupStats { outcomes }
    }

    /// Increment an outcome counter.
    pub fn increment(&self, outcome: OutcomeType) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in LookupStats initialization.",
                outcome
            );
        }
    }

    /// Get the count for an outcome type.
    pub fn get(&self, outcome: OutcomeType) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of failed lookups (DNSSEC and TXT).
    pub fn total_errors(&self) -> usize {
        OutcomeType::iter()
            .filter(OutcomeType::is_error)
            .map(|o| self.get(o))
            .sum()
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}
