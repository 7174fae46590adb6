//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{LookupStats, OutcomeType};

/// Prints the non-zero outcome counters to the log.
pub fn print_lookup_statistics(stats: &LookupStats) {
    let total_errors = stats.total_errors();

    info!("Outcome Counts:");
    for outcome in OutcomeType::iter() {
        let count = stats.get(outcome);
        if count > 0 {
            info!("   {}: {}", outcome.as_str(), count);
        }
    }

    if total_errors > 0 {
        info!(
            "{} lookup{} failed and were reported as negative",
            total_errors,
            if total_errors == 1 { "" } else { "s" }
        );
    }
}

/// Prints a one-line summary of the run.
pub fn print_simple_summary(total: usize, secure: usize, markers: usize, elapsed_seconds: f64) {
    info!(
        "✅ Checked {} domain{} ({} DNSSEC-secure, {} with TXT marker) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        secure,
        markers,
        elapsed_seconds
    );
}
