//! Per-domain lookup worker.
//!
//! Runs the DNSSEC and TXT lookups for one domain concurrently. Neither
//! lookup can fail the worker: every error becomes a negative outcome.

use log::{debug, error, info, warn};

use crate::dns::{first_marker, DnssecLookup, SecurityStatus, TxtLookup};

use super::context::LookupContext;
use super::types::{DnssecCheck, DomainCheck, TxtCheck};

/// Checks one domain and records both outcomes in the context's stats.
pub async fn check_domain<D, T>(domain: String, ctx: LookupContext<'_, D, T>) -> DomainCheck
where
    D: DnssecLookup,
    T: TxtLookup,
{
    let (dnssec, txt) = tokio::join!(
        check_dnssec(&domain, ctx.dnssec),
        check_txt(&domain, ctx.txt, ctx.marker)
    );

    ctx.stats.increment(dnssec.outcome());
    ctx.stats.increment(txt.outcome());

    DomainCheck {
        domain,
        dnssec,
        txt,
    }
}

async fn check_dnssec<D: DnssecLookup>(domain: &str, lookup: &D) -> DnssecCheck {
    match lookup.lookup_a(domain).await {
        Ok(answer) if answer.status == SecurityStatus::Secure => {
            info!("{}/A = {}", domain, answer.addresses.join(", "));
            DnssecCheck::Secure {
                addresses: answer.addresses,
            }
        }
        Ok(answer) => {
            error!(
                "DNSSEC verification for {}/A failed ({}): {}",
                domain,
                answer.status,
                answer.reason_chain.join(", ")
            );
            DnssecCheck::Unverified {
                status: answer.status,
                reasons: answer.reason_chain,
            }
        }
        Err(e) => {
            warn!("DNSSEC lookup for {domain} failed: {e:#}");
            DnssecCheck::Failed {
                error: format!("{e:#}"),
            }
        }
    }
}

async fn check_txt<T: TxtLookup>(domain: &str, lookup: &T, marker: &str) -> TxtCheck {
    match lookup.lookup_txt(domain).await {
        Ok(entries) => match first_marker(&entries, marker) {
            Some(found) => {
                debug!("{domain} TXT marker: {found}");
                TxtCheck::Marker(found)
            }
            None => TxtCheck::NoMarker,
        },
        Err(e) => {
            debug!("TXT lookup for {domain} failed: {e:#}");
            TxtCheck::Failed {
                error: format!("{e:#}"),
            }
        }
    }
}
