//! Logging configuration
//!
//! Structured logs go to stderr so stdout stays free for progress output and
//! NDJSON events. `RUST_LOG` takes precedence over `-v`.

use anyhow::{Context, Result};

/// Filter directive for a `-v` count
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing subscriber for logging
pub fn init_logging(verbose: u8) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level_for_verbosity(verbose)))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}
