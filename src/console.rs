//! Console input worker
//!
//! Reads newline-terminated lines from a blocking source and hands them to
//! the relay. Console reads cannot be cancelled, so the worker runs on its
//! own OS thread instead of the runtime's blocking pool; it is left behind
//! when the process exits and never holds up runtime shutdown.

use crate::helper::LINE_QUEUE_DEPTH;
use std::io::{self, BufRead, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error};

/// Receiving end of the console line queue
pub type LineReceiver = mpsc::Receiver<Vec<u8>>;

/// Start a worker thread reading lines from `reader`
///
/// Each delivered buffer holds one line including its `\n`. End of input
/// counts as a read failure: it is logged, and bytes left without a
/// terminator are dropped. The queue closes when the source ends or fails,
/// or when the receiver is dropped.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<LineReceiver>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_QUEUE_DEPTH);
    std::thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || read_lines(reader, tx))?;
    Ok(rx)
}

/// Start a worker thread reading lines from the process's standard input
pub fn spawn_stdin_reader() -> io::Result<LineReceiver> {
    spawn_line_reader(BufReader::new(io::stdin()))
}

fn read_lines<R: BufRead>(mut reader: R, tx: mpsc::Sender<Vec<u8>>) {
    loop {
        let mut line = Vec::new();
        match reader.read_until(b'\n', &mut line) {
            Ok(n) if n == 0 || !line.ends_with(b"\n") => {
                error!("Error reading input: EOF");
                if n > 0 {
                    debug!("Dropping {} unterminated bytes", n);
                }
                break;
            }
            Ok(_) => {
                if tx.blocking_send(line).is_err() {
                    debug!("Relay finished, dropping console input");
                    break;
                }
            }
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        }
    }
}
