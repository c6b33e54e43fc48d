//! Sockcat - netcat-style TCP relay
//!
//! This is the main entry point for the Sockcat application.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use sockcat::cli::Cli;
use sockcat::helper::log_directives;
use sockcat::run_session;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(&cli.log_level, cli.json_log)?;

    // Bad values surface like clap's own argument errors
    let session = match cli.session() {
        Ok(session) => session,
        Err(e) if e.is_usage() => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
        Err(e) => return Err(e.into()),
    };

    debug!("Sockcat v{}", sockcat::VERSION);

    let stats = run_session(session).await?;

    debug!(
        "Session finished: {} bytes received, {} bytes sent",
        stats.bytes_in, stats.bytes_out
    );

    Ok(())
}

/// Setup logging based on command-line options
///
/// Logs go to stderr; stdout carries relayed bytes only.
fn setup_logging(level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_new(log_directives(level))?;

    if json {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}
