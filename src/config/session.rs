//! Session configuration types
//!
//! One configuration per subcommand. Both are built from command-line
//! arguments; nothing is read from files or the environment.

use super::TcpConfig;
use crate::error::{Result, SockcatError};
use crate::transport::TargetAddr;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Configuration for the `connect` subcommand
#[derive(Debug, Clone)]
pub struct ConnectConfig {
    /// Address to connect to
    pub target: TargetAddr,

    /// Optional SOCKS5 proxy (host:port) the connection is routed through
    pub proxy: Option<String>,

    /// Socket settings
    pub tcp: TcpConfig,
}

impl ConnectConfig {
    /// Build a connect configuration from raw argument strings
    ///
    /// An empty proxy string is treated the same as no proxy.
    pub fn new(target: &str, proxy: Option<&str>, tcp: TcpConfig) -> Result<Self> {
        let target = TargetAddr::parse(target)?;
        let proxy = proxy
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        let config = ConnectConfig { target, proxy, tcp };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.tcp.validate().map_err(SockcatError::Usage)?;
        if let Some(proxy) = &self.proxy {
            // The proxy must at least look like host:port.
            TargetAddr::parse(proxy).map_err(|_| {
                SockcatError::Usage(format!("invalid proxy address: {}", proxy))
            })?;
        }
        Ok(())
    }
}

/// Configuration for the `listen` subcommand
#[derive(Debug, Clone)]
pub struct ListenConfig {
    /// Local port, bound on all interfaces
    pub port: u16,

    /// Socket settings applied to the accepted connection
    pub tcp: TcpConfig,
}

impl ListenConfig {
    /// Build a listen configuration from the port argument
    pub fn new(port: &str, tcp: TcpConfig) -> Result<Self> {
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| SockcatError::Usage(format!("invalid port: {}", port)))?;
        tcp.validate().map_err(SockcatError::Usage)?;
        Ok(ListenConfig { port, tcp })
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

/// What the front door asked for
#[derive(Debug, Clone)]
pub enum SessionConfig {
    /// Outbound connection
    Connect(ConnectConfig),
    /// Single inbound connection
    Listen(ListenConfig),
}
