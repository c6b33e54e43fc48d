//! Single-connection listener
//!
//! Binds a local port on all interfaces and accepts exactly one inbound
//! connection. [`SingleListener::accept`] consumes the listener, so the
//! socket is closed as soon as accept returns.

use crate::config::ListenConfig;
use crate::error::{Result, SockcatError};
use crate::helper::NOTICE_TARGET;
use crate::transport::SocketOpts;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info};

/// Listener that hands out a single connection
#[derive(Debug)]
pub struct SingleListener {
    listener: TcpListener,
    socket_opts: SocketOpts,
}

impl SingleListener {
    /// Bind the port from the configuration
    pub async fn bind(config: &ListenConfig) -> Result<Self> {
        let addr = config.bind_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| SockcatError::Bind(format!("{}: {}", addr, e)))?;

        debug!("Listening on {}", addr);

        Ok(SingleListener {
            listener,
            socket_opts: SocketOpts::from_tcp_config(&config.tcp),
        })
    }

    /// Address actually bound (useful when the port was 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept one connection and close the listener
    ///
    /// An accept failure is fatal for the session: no connection is returned.
    pub async fn accept(self) -> Result<(TcpStream, SocketAddr)> {
        let (stream, peer) = self.listener.accept().await.map_err(|e| {
            error!("Error accepting connection: {}", e);
            SockcatError::Accept(e.to_string())
        })?;

        self.socket_opts.apply_or_warn(&stream);
        info!(target: NOTICE_TARGET, "New connection: {}", peer);

        Ok((stream, peer))
    }
}
