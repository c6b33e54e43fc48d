//! Target address parsing
//!
//! Parses `host:port` strings into an IP or domain target, the two shapes a
//! SOCKS5 CONNECT request can carry.

use crate::error::{Result, SockcatError};
use async_socks5::AddrKind;
use std::fmt;
use std::net::SocketAddr;

/// Address of the remote end of a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetAddr {
    /// IP address with port
    Ip(SocketAddr),
    /// Domain name with port
    Domain(String, u16),
}

impl TargetAddr {
    /// Parse a `host:port` string
    ///
    /// IPv6 literals must be bracketed (`[::1]:80`). Anything that is not an
    /// IP literal is kept as a domain name and resolved later. Ports must be
    /// numeric; service names such as `http` are not looked up.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if let Ok(addr) = input.parse::<SocketAddr>() {
            return Ok(TargetAddr::Ip(addr));
        }

        let (host, port) = input
            .rsplit_once(':')
            .ok_or_else(|| invalid(input, "expected host:port"))?;
        if host.is_empty() {
            return Err(invalid(input, "missing host"));
        }
        if host.contains(':') || host.starts_with('[') {
            return Err(invalid(input, "malformed IPv6 address"));
        }
        let port = port
            .parse::<u16>()
            .map_err(|_| invalid(input, "port must be a number from 0 to 65535"))?;

        Ok(TargetAddr::Domain(host.to_string(), port))
    }

    /// Address in the form the SOCKS5 client sends in its CONNECT request
    pub fn to_socks_addr(&self) -> AddrKind {
        match self {
            TargetAddr::Ip(addr) => AddrKind::Ip(*addr),
            TargetAddr::Domain(domain, port) => AddrKind::Domain(domain.clone(), *port),
        }
    }
}

fn invalid(input: &str, reason: &str) -> SockcatError {
    SockcatError::Usage(format!("invalid address {:?}: {}", input, reason))
}

impl fmt::Display for TargetAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetAddr::Ip(addr) => write!(f, "{}", addr),
            TargetAddr::Domain(domain, port) => write!(f, "{}:{}", domain, port),
        }
    }
}

impl From<SocketAddr> for TargetAddr {
    fn from(addr: SocketAddr) -> Self {
        TargetAddr::Ip(addr)
    }
}
