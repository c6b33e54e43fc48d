//! Direct TCP dialer
//!
//! Opens plain TCP connections to the target.

use super::{Dialer, SocketOpts, TargetAddr};
use crate::config::TcpConfig;
use crate::error::{Result, SockcatError};
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;

/// Dialer for direct connections
#[derive(Debug, Clone)]
pub struct DirectDialer {
    /// Socket options to apply to connections
    socket_opts: SocketOpts,
    /// Connection timeout
    connect_timeout: Duration,
}

impl DirectDialer {
    /// Create a direct dialer from TCP config
    pub fn new(config: &TcpConfig) -> Self {
        DirectDialer {
            socket_opts: SocketOpts::from_tcp_config(config),
            connect_timeout: config.connect_timeout(),
        }
    }
}

#[async_trait]
impl Dialer for DirectDialer {
    fn name(&self) -> &'static str {
        "direct"
    }

    async fn dial(&self, target: &TargetAddr) -> Result<TcpStream> {
        let stream = tokio::time::timeout(self.connect_timeout, connect(target))
            .await
            .map_err(|_| {
                SockcatError::Timeout(format!(
                    "no connection to {} within {:?}",
                    target, self.connect_timeout
                ))
            })?
            .map_err(|e| SockcatError::Connection(format!("{}: {}", target, e)))?;

        self.socket_opts.apply_or_warn(&stream);

        tracing::debug!("TCP connection established to {}", target);

        Ok(stream)
    }
}

async fn connect(target: &TargetAddr) -> std::io::Result<TcpStream> {
    match target {
        TargetAddr::Ip(addr) => TcpStream::connect(addr).await,
        TargetAddr::Domain(domain, port) => TcpStream::connect((domain.as_str(), *port)).await,
    }
}
