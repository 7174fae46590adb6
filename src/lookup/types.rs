//! Per-domain lookup results.

use crate::dns::SecurityStatus;
use crate::error_handling::OutcomeType;

/// Outcome of the DNSSEC A lookup for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnssecCheck {
    /// Validated; the resolved addresses are kept for logging only.
    Secure {
        /// Resolved IPv4 addresses
        addresses: Vec<String>,
    },
    /// A verdict other than secure.
    Unverified {
        /// Verdict returned by the validator
        status: SecurityStatus,
        /// Why validation did not succeed
        reasons: Vec<String>,
    },
    /// The lookup itself failed.
    Failed {
        /// Error message chain
        error: String,
    },
}

impl DnssecCheck {
    /// Whether the A lookup validated.
    pub fn is_secure(&self) -> bool {
        matches!(self, DnssecCheck::Secure { .. })
    }

    /// Statistics bucket for this outcome.
    pub fn outcome(&self) -> OutcomeType {
        match self {
            DnssecCheck::Secure { .. } => OutcomeType::DnssecSecure,
            DnssecCheck::Unverified { status, .. } => match status {
                SecurityStatus::Secure | SecurityStatus::Indeterminate => {
                    OutcomeType::DnssecIndeterminate
                }
                SecurityStatus::Insecure => OutcomeType::DnssecInsecure,
                SecurityStatus::Bogus => OutcomeType::DnssecBogus,
            },
            DnssecCheck::Failed { .. } => OutcomeType::DnssecLookupError,
        }
    }
}

/// Outcome of the TXT lookup for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxtCheck {
    /// First entry carrying the marker prefix.
    Marker(String),
    /// Lookup succeeded; no entry carries the marker.
    NoMarker,
    /// The lookup failed.
    Failed {
        /// Error message chain
        error: String,
    },
}

impl TxtCheck {
    /// The marker entry, if one was found.
    pub fn marker(&self) -> Option<&str> {
        match self {
            TxtCheck::Marker(m) => Some(m),
            _ => None,
        }
    }

    /// Statistics bucket for this outcome.
    pub fn outcome(&self) -> OutcomeType {
        match self {
            TxtCheck::Marker(_) => OutcomeType::TxtMarkerFound,
            TxtCheck::NoMarker => OutcomeType::TxtNoMarker,
            TxtCheck::Failed { .. } => OutcomeType::TxtLookupError,
        }
    }
}

/// Both lookup outcomes for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCheck {
    /// Domain as read from the input
    pub domain: String,
    /// DNSSEC A lookup outcome
    pub dnssec: DnssecCheck,
    /// TXT lookup outcome
    pub txt: TxtCheck,
}

impl DomainCheck {
    /// Flattens the outcomes into a report row.
    pub fn into_record(self) -> DomainRecord {
        DomainRecord {
            dnssec_secure: self.dnssec.is_secure(),
            txt_marker: match self.txt {
                TxtCheck::Marker(m) => Some(m),
                _ => None,
            },
            domain: self.domain,
        }
    }
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    /// Domain as read from the input
    pub domain: String,
    /// Whether the A lookup validated as secure
    pub dnssec_secure: bool,
    /// First TXT entry carrying the marker prefix
    pub txt_marker: Option<String>,
}
