//! Logging setup for the CLI
//!
//! Library crates log through the `log` facade; the fmt subscriber installed
//! here also forwards those records. `RUST_LOG` overrides the verbosity flag.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity flag
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global subscriber, writing to stderr
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
