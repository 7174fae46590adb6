//! TXT record queries and marker selection.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Error, Result};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::lookup::Lookup;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

/// Fetches the TXT entries of a domain.
pub trait TxtLookup: Send + Sync {
    /// Returns every TXT entry of `domain`, each with its character-strings joined.
    fn lookup_txt(&self, domain: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// [`TxtLookup`] over a `hickory-resolver` pool.
#[derive(Clone)]
pub struct HickoryTxtLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryTxtLookup {
    /// Wraps a resolver whose name servers are the TXT endpoints.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

impl TxtLookup for HickoryTxtLookup {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>> {
        lookup_txt_records(domain, &self.resolver).await
    }
}

/// Queries TXT (text) records for a domain.
///
/// # Returns
///
/// A vector of TXT record strings; empty when the domain has none.
///
/// # Errors
///
/// Timeouts and other resolver failures are returned as errors.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, Error> {
    txt_entries(resolver.lookup(domain, RecordType::TXT).await)
}

/// Extracts TXT entries from a lookup result.
///
/// NODATA and NXDOMAIN both come back as `NoRecordsFound` and mean the
/// domain has no entries, not that the lookup failed.
pub(crate) fn txt_entries(result: Result<Lookup, ResolveError>) -> Result<Vec<String>, Error> {
    match result {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        // TXT records can contain multiple strings - join them
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            Ok(txt_records)
        }
        Err(e) if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Returns the first entry starting with `prefix`.
pub fn first_marker(entries: &[String], prefix: &str) -> Option<String> {
    entries
        .iter()
        .find(|entry| entry.starts_with(prefix))
        .cloned()
}
