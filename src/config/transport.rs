//! TCP configuration types
//!
//! Socket-level settings shared by the dialers and the listener.

use crate::helper::DEFAULT_CONNECT_TIMEOUT_SECS;
use std::time::Duration;

/// Default keepalive seconds
fn default_keepalive_secs() -> u64 {
    20
}

/// Default keepalive interval
fn default_keepalive_interval() -> u64 {
    8
}

/// TCP configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcpConfig {
    /// Enable TCP_NODELAY
    pub nodelay: bool,

    /// TCP keepalive timeout in seconds
    pub keepalive_secs: u64,

    /// TCP keepalive interval in seconds
    pub keepalive_interval: u64,

    /// Upper bound for establishing an outbound connection, in seconds
    pub connect_timeout: u64,
}

impl Default for TcpConfig {
    fn default() -> Self {
        TcpConfig {
            nodelay: true,
            keepalive_secs: default_keepalive_secs(),
            keepalive_interval: default_keepalive_interval(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl TcpConfig {
    /// Connect timeout as a [`Duration`]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.connect_timeout == 0 {
            return Err("connect timeout must be at least one second".to_string());
        }
        if self.keepalive_interval == 0 {
            return Err("keepalive interval must be non-zero".to_string());
        }
        Ok(())
    }
}
