//! DNSSEC-validated A-record lookups.
//!
//! The validating resolver refuses answers it cannot prove, so the outcome of
//! a lookup is read from whether it succeeded and, when it did not, from the
//! kind of error it produced.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Error, Result};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::lookup::Lookup;
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

/// Validation status of a DNSSEC lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityStatus {
    /// The answer is signed and the chain of trust verified.
    Secure,
    /// The zone is provably unsigned.
    Insecure,
    /// Signatures are present but do not verify.
    Bogus,
    /// Validation could not reach a verdict.
    Indeterminate,
}

impl std::fmt::Display for SecurityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SecurityStatus::Secure => "SECURE",
            SecurityStatus::Insecure => "INSECURE",
            SecurityStatus::Bogus => "BOGUS",
            SecurityStatus::Indeterminate => "INDETERMINATE",
        })
    }
}

/// Result of a DNSSEC A lookup that reached a verdict.
///
/// `addresses` is filled for [`SecurityStatus::Secure`], `reason_chain` for
/// every other status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnssecAnswer {
    /// Validation verdict
    pub status: SecurityStatus,
    /// Resolved IPv4 addresses
    pub addresses: Vec<String>,
    /// Why validation did not succeed, outermost reason first
    pub reason_chain: Vec<String>,
}

impl DnssecAnswer {
    /// A verified answer.
    pub fn secure(addresses: Vec<String>) -> Self {
        DnssecAnswer {
            status: SecurityStatus::Secure,
            addresses,
            reason_chain: Vec::new(),
        }
    }

    /// An answer that did not validate.
    pub fn unverified(status: SecurityStatus, reason_chain: Vec<String>) -> Self {
        DnssecAnswer {
            status,
            addresses: Vec::new(),
            reason_chain,
        }
    }
}

/// Performs DNSSEC-validated A lookups.
///
/// `Ok` carries a verdict; `Err` means the lookup itself failed (transport,
/// timeout) and no verdict was reached.
pub trait DnssecLookup: Send + Sync {
    /// Resolves the A records of `domain` with validation.
    fn lookup_a(&self, domain: &str) -> impl Future<Output = Result<DnssecAnswer>> + Send;
}

/// [`DnssecLookup`] over a validating `hickory-resolver`.
#[derive(Clone)]
pub struct HickoryDnssecLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryDnssecLookup {
    /// Wraps a resolver built with `validate` enabled.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

impl DnssecLookup for HickoryDnssecLookup {
    async fn lookup_a(&self, domain: &str) -> Result<DnssecAnswer> {
        dnssec_answer(domain, self.resolver.lookup(domain, RecordType::A).await)
    }
}

/// Turns the result of a validating A lookup into a verdict.
pub(crate) fn dnssec_answer(
    domain: &str,
    result: Result<Lookup, ResolveError>,
) -> Result<DnssecAnswer> {
    match result {
        Ok(lookup) => {
            let addresses: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::A(a) = rdata {
                        Some(a.to_string())
                    } else {
                        None
                    }
                })
                .collect();
            if addresses.is_empty() {
                Ok(DnssecAnswer::unverified(
                    SecurityStatus::Indeterminate,
                    vec!["answer contained no A records".to_string()],
                ))
            } else {
                Ok(DnssecAnswer::secure(addresses))
            }
        }
        Err(e) => match classify_resolve_error(&e, domain) {
            Some(status) => Ok(DnssecAnswer::unverified(status, reason_chain(&e))),
            None => Err(Error::new(e)),
        },
    }
}

/// Collects an error and its sources as strings, outermost first.
///
/// Adjacent duplicates are dropped; resolver errors often repeat their
/// source's message verbatim.
pub fn reason_chain(err: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut reasons: Vec<String> = Vec::new();
    for message in std::iter::successors(Some(err), |e| e.source()).map(|e| e.to_string()) {
        if reasons.last() != Some(&message) {
            reasons.push(message);
        }
    }
    reasons
}

/// Maps a resolver error for `domain` to a validation verdict.
///
/// Returns `None` for transport failures (timeouts, I/O, no usable name
/// server), in which case the lookup counts as failed. Errors that carry only
/// a message fall back to [`classify_validation_error`].
pub fn classify_resolve_error(err: &ResolveError, domain: &str) -> Option<SecurityStatus> {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => Some(SecurityStatus::Indeterminate),
        ResolveErrorKind::Timeout | ResolveErrorKind::NoConnections | ResolveErrorKind::Io(_) => {
            None
        }
        ResolveErrorKind::Proto(proto) => match proto.kind() {
            ProtoErrorKind::RrsigsNotPresent { .. } => Some(SecurityStatus::Insecure),
            ProtoErrorKind::Ring(_) => Some(SecurityStatus::Bogus),
            ProtoErrorKind::Timeout
            | ProtoErrorKind::Timer
            | ProtoErrorKind::Busy
            | ProtoErrorKind::Canceled(_)
            | ProtoErrorKind::Io(_) => None,
            ProtoErrorKind::Message(_) | ProtoErrorKind::Msg(_) => {
                classify_validation_error(&[proto.to_string()], domain)
            }
            _ => None,
        },
        ResolveErrorKind::Message(_) | ResolveErrorKind::Msg(_) => {
            classify_validation_error(&[err.to_string()], domain)
        }
        _ => None,
    }
}

const TRANSPORT_MARKERS: &[&str] = &[
    "timed out",
    "timeout",
    "connection",
    "io error",
    "tls",
    "http",
    "busy",
];
const NO_ANSWER_MARKERS: &[&str] = &["no results", "no record found", "nxdomain"];
const UNSIGNED_MARKERS: &[&str] = &["not present", "insecure", "unsigned", "no rrsig"];
const VALIDATION_MARKERS: &[&str] = &[
    "rrsig",
    "dnskey",
    "ds record",
    "nsec",
    "signature",
    "dnssec",
    "bogus",
    "validate",
    "validation",
];

/// Maps free-text validation messages to a verdict.
///
/// Occurrences of `domain` are removed first so the queried name never
/// matches a keyword. Returns `None` for transport failures and for messages
/// nothing here recognizes.
pub fn classify_validation_error(reasons: &[String], domain: &str) -> Option<SecurityStatus> {
    let mut text = reasons.join(" | ").to_lowercase();
    let name = domain.trim_end_matches('.').to_lowercase();
    if !name.is_empty() {
        text = text.replace(&name, "");
    }
    let has = |markers: &[&str]| markers.iter().any(|m| text.contains(m));

    if has(TRANSPORT_MARKERS) {
        None
    } else if has(NO_ANSWER_MARKERS) {
        Some(SecurityStatus::Indeterminate)
    } else if has(VALIDATION_MARKERS) {
        if has(UNSIGNED_MARKERS) {
            Some(SecurityStatus::Insecure)
        } else {
            Some(SecurityStatus::Bogus)
        }
    } else {
        None
    }
}
