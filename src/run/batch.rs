//! Batch scheduler.
//!
//! Splits the domain list into contiguous batches and checks them one batch
//! at a time. Within a batch every domain is checked concurrently and the
//! scheduler waits for all of them before moving on.

use std::time::{Duration, Instant};

use futures::future::join_all;
use log::{debug, info};

use crate::app::log_progress;
use crate::config::Config;
use crate::dns::{DnssecLookup, TxtLookup};
use crate::lookup::{check_domain, DomainCheck, DomainRecord, LookupContext};

/// Batch size and pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSettings {
    /// Maximum domains per batch
    pub batch_size: usize,
    /// Pause before each batch
    pub delay: Duration,
}

impl BatchSettings {
    /// Reads batch size and delay from the run configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            batch_size: config.batch_size,
            delay: Duration::from_millis(config.batch_delay_ms),
        }
    }
}

/// Splits `domains` into order-preserving batches of at most `batch_size`.
///
/// Every batch but the last is full. A `batch_size` of zero is treated as one.
pub fn partition(domains: &[String], batch_size: usize) -> std::slice::Chunks<'_, String> {
    domains.chunks(batch_size.max(1))
}

/// Checks every domain, batch by batch, and returns the report rows.
///
/// Before each batch the scheduler sleeps for `settings.delay`. Rows keep the
/// input order. A domain whose lookups fail still produces a row.
pub async fn run_batches<D, T>(
    domains: &[String],
    settings: BatchSettings,
    ctx: LookupContext<'_, D, T>,
) -> Vec<DomainRecord>
where
    D: DnssecLookup,
    T: TxtLookup,
{
    let total_batches = domains.len().div_ceil(settings.batch_size.max(1));
    let start_time = Instant::now();
    let mut records = Vec::with_capacity(domains.len());

    for (index, batch) in partition(domains, settings.batch_size).enumerate() {
        info!(
            "Batch {}/{} ({} domains)",
            index + 1,
            total_batches,
            batch.len()
        );
        tokio::time::sleep(settings.delay).await;

        let checks = join_all(
            batch
                .iter()
                .map(|domain| check_domain(domain.clone(), ctx)),
        )
        .await;

        let batch_records: Vec<DomainRecord> =
            checks.into_iter().map(DomainCheck::into_record).collect();
        debug!("Batch {} results: {:?}", index + 1, batch_records);
        records.extend(batch_records);

        log_progress(start_time, records.len(), domains.len());
    }

    records
}
