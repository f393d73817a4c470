use devdns_domain::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_DNS_PORT: u16 = 53;

/// An upstream server as written in the configuration.
///
/// Literal addresses are parsed once; host names are looked up through the
/// system resolver on every use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamEndpoint {
    Addr(SocketAddr),
    Host(String),
}

impl UpstreamEndpoint {
    /// Accepts `ip:port`, `[v6]:port`, a bare IP (port 53) or `host:port`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(addr) = raw.parse::<SocketAddr>() {
            return Self::Addr(addr);
        }
        if let Ok(ip) = raw.parse::<IpAddr>() {
            return Self::Addr(SocketAddr::new(ip, DEFAULT_DNS_PORT));
        }
        Self::Host(raw.to_string())
    }

    pub async fn resolve(&self) -> Result<SocketAddr, DomainError> {
        match self {
            Self::Addr(addr) => Ok(*addr),
            Self::Host(host) => tokio::net::lookup_host(host.as_str())
                .await
                .map_err(|e| DomainError::InvalidUpstreamAddress(format!("{}: {}", host, e)))?
                .next()
                .ok_or_else(|| {
                    DomainError::InvalidUpstreamAddress(format!("{}: no addresses", host))
                }),
        }
    }
}

impl fmt::Display for UpstreamEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Addr(addr) => write!(f, "{}", addr),
            Self::Host(host) => f.write_str(host),
        }
    }
}
