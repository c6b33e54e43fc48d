//! Helper utilities for Sockcat
//!
//! Shared constants and small IO helpers.

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Largest chunk read from the connection in one go
pub const RELAY_CHUNK_SIZE: usize = 1024;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Capacity of the queue between the console reader and the relay
pub const LINE_QUEUE_DEPTH: usize = 1;

/// Tracing target for notices the user always sees ("New connection",
/// "Connection closed."), whatever `--log-level` says
pub const NOTICE_TARGET: &str = "sockcat::notice";

/// Filter directives for a `--log-level` value
///
/// Unknown levels fall back to `info`. Notices stay at `info` on top of the
/// chosen level.
pub fn log_directives(level: &str) -> String {
    let level = match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" => "error",
        _ => "info",
    };
    format!("{},{}=info", level, NOTICE_TARGET)
}

/// Write a buffer in full and flush it
///
/// A single `write_all` keeps one buffer together on the wire; the flush
/// makes it visible to the other side before the next one is taken.
pub async fn write_flush<W>(writer: &mut W, buf: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    writer.write_all(buf).await?;
    writer.flush().await
}
