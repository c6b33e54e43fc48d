//! Error types for Sockcat
//!
//! This module defines the error taxonomy surfaced to the user. Every
//! variant renders as a human-readable message; there are no error codes.

use std::io;
use thiserror::Error;

/// Main error type for Sockcat operations
#[derive(Error, Debug)]
pub enum SockcatError {
    /// Wrong or malformed command-line arguments
    #[error("Usage error: {0}")]
    Usage(String),

    /// SOCKS5 proxy unreachable or handshake rejected
    #[error("SOCKS5 proxy error: {0}")]
    Proxy(String),

    /// Target unreachable or refused
    #[error("Connection error: {0}")]
    Connection(String),

    /// Local port could not be bound
    #[error("Bind error: {0}")]
    Bind(String),

    /// Inbound connection could not be accepted
    #[error("Accept error: {0}")]
    Accept(String),

    /// Connection attempt took too long
    #[error("Timeout: {0}")]
    Timeout(String),

    /// IO error during the relay
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl SockcatError {
    /// Whether the error was raised before any network activity
    pub fn is_usage(&self) -> bool {
        matches!(self, SockcatError::Usage(_))
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, SockcatError>;
