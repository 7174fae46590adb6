//! Configuration constants.
//!
//! Defaults for the audit run and the table of built-in DNS-over-HTTPS hosts.

use std::net::{IpAddr, Ipv4Addr};

/// Default input file (CSV export of resolver events)
pub const DEFAULT_INPUT_PATH: &str = "resolve_events.csv";
/// Default report path
pub const DEFAULT_OUTPUT_PATH: &str = "results.csv";

/// Maximum number of domains looked up concurrently in one batch
pub const DEFAULT_BATCH_SIZE: usize = 200;
/// Pause before each batch, in milliseconds
pub const DEFAULT_BATCH_DELAY_MS: u64 = 200;

/// Zero-based position of the domain field in each input row
pub const DEFAULT_DOMAIN_COLUMN: usize = 17;
/// Strips the `['example.com','TXT']` wrapper; capture group 1 is the domain.
pub const DEFAULT_COLUMN_PATTERN: &str = r"(?i)\['(.*)','TXT'\]";

/// TXT entries starting with this prefix are reported
pub const DEFAULT_TXT_MARKER: &str = "ENS1";

/// DoH host used for DNSSEC-validated A lookups
pub const DEFAULT_DNSSEC_ENDPOINT: &str = "cloudflare-dns.com";
/// DoH hosts used for TXT lookups
pub const DEFAULT_TXT_ENDPOINTS: &[&str] = &["dns.google", "dns.switch.ch"];

/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Query attempts per name server before giving up
pub const DNS_ATTEMPTS: usize = 2;
/// HTTPS port for DoH servers
pub const DOH_PORT: u16 = 443;

/// CSV report header
pub const REPORT_HEADER: [&str; 3] = ["Domain", "DNSSEC", "TXTRecord"];

const fn v4(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(a, b, c, d))
}

/// DoH hosts that can be named without listing their addresses.
pub const KNOWN_DOH_HOSTS: &[(&str, &[IpAddr])] = &[
    ("cloudflare-dns.com", &[v4(1, 1, 1, 1), v4(1, 0, 0, 1)]),
    ("dns.google", &[v4(8, 8, 8, 8), v4(8, 8, 4, 4)]),
    ("dns.switch.ch", &[v4(130, 59, 31, 248), v4(130, 59, 31, 251)]),
    ("dns.quad9.net", &[v4(9, 9, 9, 9), v4(149, 112, 112, 112)]),
];
