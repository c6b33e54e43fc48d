//! Command-line interface
//!
//! Two subcommands, `connect` and `listen`, each taking exactly one
//! positional argument. Global options tune logging and sockets.

use crate::config::{ConnectConfig, ListenConfig, SessionConfig, TcpConfig};
use crate::error::Result;
use crate::helper::DEFAULT_CONNECT_TIMEOUT_SECS;
use clap::{ArgAction, Parser, Subcommand};

/// Sockcat - relay a TCP connection to the terminal, optionally via SOCKS5
#[derive(Parser, Debug)]
#[command(name = "sockcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); connection notices are always shown
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    /// Enable JSON logging format
    #[arg(long, global = true)]
    pub json_log: bool,

    /// Connect timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Set TCP_NODELAY on the connection
    #[arg(long, default_value_t = true, action = ArgAction::Set, global = true)]
    pub nodelay: bool,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Establish a TCP connection to a specified address
    #[command(visible_alias = "c")]
    Connect {
        /// Target address (host:port)
        address: String,

        /// SOCKS5 proxy address (host:port) for the connection
        #[arg(long, visible_alias = "s5")]
        proxy: Option<String>,
    },

    /// Listen on the specified port and accept a single connection
    #[command(visible_alias = "l")]
    Listen {
        /// Port to bind on all interfaces
        port: String,
    },
}

impl Cli {
    /// Socket settings from the global options
    pub fn tcp_config(&self) -> TcpConfig {
        TcpConfig {
            nodelay: self.nodelay,
            connect_timeout: self.timeout,
            ..Default::default()
        }
    }

    /// Turn the parsed arguments into a session configuration
    pub fn session(&self) -> Result<SessionConfig> {
        let tcp = self.tcp_config();
        match &self.command {
            Command::Connect { address, proxy } => Ok(SessionConfig::Connect(
                ConnectConfig::new(address, proxy.as_deref(), tcp)?,
            )),
            Command::Listen { port } => Ok(SessionConfig::Listen(ListenConfig::new(port, tcp)?)),
        }
    }
}
