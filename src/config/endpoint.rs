//! DNS-over-HTTPS endpoint parsing.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::config::constants::KNOWN_DOH_HOSTS;
use crate::error_handling::ConfigError;

/// A DNS-over-HTTPS server: the TLS host name plus the addresses to dial.
///
/// Parsed from either a bare host name listed in [`KNOWN_DOH_HOSTS`]
/// (`dns.google`) or an explicit `host=ip[,ip...]` form
/// (`doh.example.net=192.0.2.1,192.0.2.2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DohEndpoint {
    /// Host name presented in TLS SNI and checked against the certificate
    pub host: String,
    /// Addresses of the server
    pub addrs: Vec<IpAddr>,
}

impl DohEndpoint {
    /// Looks up a host in the built-in table.
    pub fn builtin(host: &str) -> Option<Self> {
        KNOWN_DOH_HOSTS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(host))
            .map(|(known, addrs)| DohEndpoint {
                host: (*known).to_string(),
                addrs: addrs.to_vec(),
            })
    }
}

impl FromStr for DohEndpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (host, addrs) = match s.split_once('=') {
            Some((host, list)) => {
                let addrs = list
                    .split(',')
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(|a| {
                        a.parse::<IpAddr>()
                            .map_err(|_| ConfigError::InvalidEndpointAddress(a.to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                (host.trim(), addrs)
            }
            None => {
                return DohEndpoint::builtin(s)
                    .ok_or_else(|| ConfigError::UnknownEndpoint(s.to_string()));
            }
        };

        if host.is_empty() || addrs.is_empty() {
            return Err(ConfigError::UnknownEndpoint(s.to_string()));
        }

        Ok(DohEndpoint {
            host: host.to_ascii_lowercase(),
            addrs,
        })
    }
}

impl fmt::Display for DohEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}
