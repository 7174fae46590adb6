//! DNS resolver initialization.
//!
//! Both resolvers talk DNS-over-HTTPS to fixed public servers: one validates
//! DNSSEC for A lookups, the other is a plain pool for TXT lookups.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{DohEndpoint, DNS_ATTEMPTS, DOH_PORT};

fn doh_name_servers(endpoints: &[DohEndpoint]) -> NameServerConfigGroup {
    let mut group = NameServerConfigGroup::new();
    for endpoint in endpoints {
        group.merge(NameServerConfigGroup::from_ips_https(
            &endpoint.addrs,
            DOH_PORT,
            endpoint.host.clone(),
            true,
        ));
    }
    group
}

fn base_opts(timeout: Duration) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS;
    // Input names are absolute; never append search domains
    opts.ndots = 0;
    opts
}

/// Initializes the DNSSEC-validating resolver used for A lookups.
///
/// Answers that cannot be proven by a chain of signatures from the root are
/// rejected by the resolver, so a successful lookup implies a secure answer.
///
/// # Arguments
///
/// * `endpoint` - DoH server to query
/// * `timeout` - Per-query timeout
pub fn init_dnssec_resolver(endpoint: &DohEndpoint, timeout: Duration) -> Arc<TokioAsyncResolver> {
    let mut opts = base_opts(timeout);
    opts.validate = true;
    opts.edns0 = true;

    let config = ResolverConfig::from_parts(
        None,
        Vec::new(),
        doh_name_servers(std::slice::from_ref(endpoint)),
    );
    Arc::new(TokioAsyncResolver::tokio(config, opts))
}

/// Initializes the resolver pool used for TXT lookups.
///
/// Queries go to the listed servers in the resolver's own order; no
/// validation is performed.
pub fn init_txt_resolver(endpoints: &[DohEndpoint], timeout: Duration) -> Arc<TokioAsyncResolver> {
    let config = ResolverConfig::from_parts(None, Vec::new(), doh_name_servers(endpoints));
    Arc::new(TokioAsyncResolver::tokio(config, base_opts(timeout)))
}
