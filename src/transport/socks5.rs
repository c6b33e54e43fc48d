//! SOCKS5 proxy dialer
//!
//! Connects to a SOCKS5 proxy, negotiates the "no authentication" method and
//! asks the proxy to CONNECT to the target. Once the proxy has replied the
//! stream carries raw target traffic.
//!
//! A reply saying the target itself could not be reached is a connection
//! error, the same as on a direct dial. Anything else that goes wrong with
//! the proxy is a proxy error.

use super::{Dialer, SocketOpts, TargetAddr};
use crate::config::TcpConfig;
use crate::error::{Result, SockcatError};
use async_socks5::UnsuccessfulReply;
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

/// Dialer that tunnels through a SOCKS5 proxy
#[derive(Debug, Clone)]
pub struct Socks5Dialer {
    /// Proxy endpoint (host:port)
    proxy: String,
    /// Socket options to apply to the proxy connection
    socket_opts: SocketOpts,
    /// Bound for proxy connect plus handshake
    connect_timeout: Duration,
}

impl Socks5Dialer {
    /// Create a SOCKS5 dialer for the given proxy
    pub fn new(proxy: impl Into<String>, config: &TcpConfig) -> Self {
        Socks5Dialer {
            proxy: proxy.into(),
            socket_opts: SocketOpts::from_tcp_config(config),
            connect_timeout: config.connect_timeout(),
        }
    }

    async fn handshake(&self, target: &TargetAddr) -> Result<TcpStream> {
        let mut stream = TcpStream::connect(self.proxy.as_str())
            .await
            .map_err(|e| SockcatError::Proxy(format!("cannot reach {}: {}", self.proxy, e)))?;

        self.socket_opts.apply_or_warn(&stream);
        debug!("Connected to SOCKS5 proxy {}", self.proxy);

        // No credentials: only the "no authentication" method is offered.
        let bound = async_socks5::connect(&mut stream, target.to_socks_addr(), None)
            .await
            .map_err(|e| handshake_error(&self.proxy, target, e))?;

        debug!("SOCKS5 tunnel to {} established (bound {:?})", target, bound);

        Ok(stream)
    }
}

/// Sort a failed negotiation into target-side and proxy-side errors
fn handshake_error(proxy: &str, target: &TargetAddr, err: async_socks5::Error) -> SockcatError {
    match err {
        async_socks5::Error::Response(
            reply @ (UnsuccessfulReply::NetworkUnreachable
            | UnsuccessfulReply::HostUnreachable
            | UnsuccessfulReply::ConnectionRefused
            | UnsuccessfulReply::TtlExpired),
        ) => SockcatError::Connection(format!("{} via {}: {:?}", target, proxy, reply)),
        err => SockcatError::Proxy(format!("{} refused CONNECT to {}: {}", proxy, target, err)),
    }
}

#[async_trait]
impl Dialer for Socks5Dialer {
    fn name(&self) -> &'static str {
        "socks5"
    }

    async fn dial(&self, target: &TargetAddr) -> Result<TcpStream> {
        tokio::time::timeout(self.connect_timeout, self.handshake(target))
            .await
            .map_err(|_| {
                SockcatError::Timeout(format!(
                    "no SOCKS5 tunnel to {} via {} within {:?}",
                    target, self.proxy, self.connect_timeout
                ))
            })?
    }
}
