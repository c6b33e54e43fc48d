//! Configuration module for Sockcat
//!
//! This module provides the typed session configuration built from the
//! command line. There is no configuration file.

mod session;
mod transport;

pub use session::{ConnectConfig, ListenConfig, SessionConfig};
pub use transport::TcpConfig;
