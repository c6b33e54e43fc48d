//! Session orchestration
//!
//! Acquires a connection (dial or accept) and hands it to the relay wired
//! to the process's standard input and output.

use crate::config::{ConnectConfig, ListenConfig, SessionConfig};
use crate::console::spawn_stdin_reader;
use crate::error::Result;
use crate::listener::SingleListener;
use crate::relay::{relay, RelayStats};
use crate::transport::create_dialer;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info};

/// Run the session described by the configuration
pub async fn run_session(config: SessionConfig) -> Result<RelayStats> {
    match config {
        SessionConfig::Connect(config) => run_connect(config).await,
        SessionConfig::Listen(config) => run_listen(config).await,
    }
}

/// Dial the target (directly or through the proxy) and relay it
pub async fn run_connect(config: ConnectConfig) -> Result<RelayStats> {
    let dialer = create_dialer(&config);
    match &config.proxy {
        Some(proxy) => info!(
            "Connecting to {} via SOCKS5 proxy {} ({} dialer)",
            config.target,
            proxy,
            dialer.name()
        ),
        None => debug!("Connecting to {} ({} dialer)", config.target, dialer.name()),
    }

    let stream = dialer.dial(&config.target).await?;

    relay_console(stream).await
}

/// Accept a single inbound connection and relay it
pub async fn run_listen(config: ListenConfig) -> Result<RelayStats> {
    let listener = SingleListener::bind(&config).await?;
    info!("Waiting for a connection on port {}", config.port);

    let (stream, _peer) = listener.accept().await?;

    relay_console(stream).await
}

/// Relay a connection against stdin and stdout
pub async fn relay_console<S>(conn: S) -> Result<RelayStats>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    let lines = spawn_stdin_reader()?;
    relay(conn, lines, tokio::io::stdout()).await
}
