//! Transport module for Sockcat
//!
//! This module provides the dialer abstraction used by the `connect`
//! subcommand and its implementations (direct TCP, SOCKS5 proxy).

mod addr;
mod socks5;
mod tcp;

pub use addr::TargetAddr;
pub use socks5::Socks5Dialer;
pub use tcp::DirectDialer;

use crate::config::{ConnectConfig, TcpConfig};
use crate::error::Result;
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use tokio::net::TcpStream;

/// Socket options for configuring connections
#[derive(Debug, Clone)]
pub struct SocketOpts {
    /// Enable TCP_NODELAY
    pub nodelay: bool,
    /// TCP keepalive timeout
    pub keepalive_secs: Option<u64>,
    /// TCP keepalive interval
    pub keepalive_interval: Option<u64>,
}

impl Default for SocketOpts {
    fn default() -> Self {
        SocketOpts::from_tcp_config(&TcpConfig::default())
    }
}

impl SocketOpts {
    /// Create socket options from TCP config
    pub fn from_tcp_config(config: &TcpConfig) -> Self {
        SocketOpts {
            nodelay: config.nodelay,
            keepalive_secs: Some(config.keepalive_secs),
            keepalive_interval: Some(config.keepalive_interval),
        }
    }

    /// Apply socket options to a TCP stream
    pub fn apply(&self, stream: &TcpStream) -> std::io::Result<()> {
        stream.set_nodelay(self.nodelay)?;

        if let (Some(timeout), Some(interval)) = (self.keepalive_secs, self.keepalive_interval) {
            let socket = socket2::SockRef::from(stream);
            let keepalive = socket2::TcpKeepalive::new()
                .with_time(Duration::from_secs(timeout))
                .with_interval(Duration::from_secs(interval));
            socket.set_tcp_keepalive(&keepalive)?;
        }

        Ok(())
    }

    /// Apply socket options, logging instead of failing
    pub fn apply_or_warn(&self, stream: &TcpStream) {
        if let Err(e) = self.apply(stream) {
            tracing::warn!("Failed to apply socket options: {}", e);
        }
    }
}

/// Dialer trait for outbound connections
///
/// Implementations produce a plain [`TcpStream`] that carries raw traffic
/// to the target, whatever happened on the way there.
#[async_trait]
pub trait Dialer: Debug + Send + Sync {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Open a connection to the target
    async fn dial(&self, target: &TargetAddr) -> Result<TcpStream>;
}

/// Create a dialer based on configuration
pub fn create_dialer(config: &ConnectConfig) -> Box<dyn Dialer> {
    match &config.proxy {
        Some(proxy) => Box::new(Socks5Dialer::new(proxy.clone(), &config.tcp)),
        None => Box::new(DirectDialer::new(&config.tcp)),
    }
}
