//! Console relay
//!
//! Pumps bytes between one connection and the local console until the peer
//! closes the connection or a write to it fails.
//!
//! ```text
//! connection --(reader task, 1024-byte chunks)--> console output
//! console input --(line queue)--> coordinator --(one write per line)--> connection
//! ```
//!
//! The reader task signals termination exactly once through a oneshot; the
//! coordinator is the only writer on the connection. When the relay returns
//! both halves of the connection have been dropped, so the socket is closed
//! on every exit path.

use crate::console::LineReceiver;
use crate::error::{Result, SockcatError};
use crate::helper::{write_flush, NOTICE_TARGET, RELAY_CHUNK_SIZE};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

/// Byte counters for a finished relay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayStats {
    /// Bytes received from the connection and written to the console
    pub bytes_in: u64,
    /// Bytes taken from the console and written to the connection
    pub bytes_out: u64,
}

/// Relay data between a connection and the console
///
/// Returns `Ok` when the peer closes the connection (or reading from it
/// fails), and `Err` when writing a console line to the connection fails.
/// Closing the console input does not end the relay.
///
/// # Arguments
///
/// * `conn` - The connection, owned by the relay until it returns
/// * `lines` - Console lines, see [`crate::console::spawn_line_reader`]
/// * `output` - Console output sink
pub async fn relay<S, O>(conn: S, mut lines: LineReceiver, output: O) -> Result<RelayStats>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
    O: AsyncWrite + Unpin + Send + 'static,
{
    let (conn_read, mut conn_write) = tokio::io::split(conn);
    let (closed_tx, mut closed_rx) = oneshot::channel();

    let reader = tokio::spawn(pump_inbound(conn_read, output, closed_tx));

    let mut bytes_out = 0u64;
    let mut input_open = true;

    let outcome = loop {
        tokio::select! {
            // Also fires if the reader task died without signalling.
            _ = &mut closed_rx => break Ok(()),
            line = lines.recv(), if input_open => match line {
                Some(line) => {
                    if let Err(e) = write_flush(&mut conn_write, &line).await {
                        error!("Error writing to connection: {}", e);
                        break Err(SockcatError::Io(e));
                    }
                    bytes_out += line.len() as u64;
                }
                None => {
                    debug!("Console input closed, waiting for the peer");
                    input_open = false;
                }
            },
        }
    };

    // The reader has already finished once it signalled.
    if outcome.is_err() {
        reader.abort();
    }
    let bytes_in = reader.await.unwrap_or_default();
    drop(conn_write);

    let stats = RelayStats {
        bytes_in,
        bytes_out,
    };
    debug!(
        "Relay finished: {} bytes in, {} bytes out",
        stats.bytes_in, stats.bytes_out
    );

    outcome.map(|()| stats)
}

/// Copy the connection to the console in chunks of at most
/// [`RELAY_CHUNK_SIZE`] bytes, then signal termination.
async fn pump_inbound<R, O>(mut conn: R, mut output: O, closed_tx: oneshot::Sender<()>) -> u64
where
    R: AsyncRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut buf = [0u8; RELAY_CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = match conn.read(&mut buf).await {
            Ok(0) => {
                debug!("Peer closed the connection");
                break;
            }
            Ok(n) => n,
            Err(e) => {
                debug!("Connection read error: {}", e);
                break;
            }
        };

        if let Err(e) = write_flush(&mut output, &buf[..n]).await {
            warn!("Console output error: {}", e);
            break;
        }
        total += n as u64;
    }

    info!(target: NOTICE_TARGET, "Connection closed.");
    let _ = closed_tx.send(());
    total
}
