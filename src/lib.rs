//! # Sockcat - minimal netcat with SOCKS5 support
//!
//! Sockcat either dials a TCP connection (directly or through a SOCKS5
//! proxy) or accepts a single inbound one, then relays bytes between that
//! connection and the terminal until the peer goes away.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sockcat::config::{ConnectConfig, SessionConfig, TcpConfig};
//! use sockcat::session::run_session;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConnectConfig::new("example.com:80", Some("127.0.0.1:1080"), TcpConfig::default())?;
//!     run_session(SessionConfig::Connect(config)).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! cli -> (transport::Dialer | listener::SingleListener) -> relay
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod helper;
pub mod listener;
pub mod relay;
pub mod session;
pub mod transport;

// Re-export commonly used items
pub use error::{Result, SockcatError};
pub use relay::{relay, RelayStats};
pub use session::run_session;

/// Version of the Sockcat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the application
pub const NAME: &str = env!("CARGO_PKG_NAME");
