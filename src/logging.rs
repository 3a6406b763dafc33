//! Logging setup

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr.
///
/// `verbose` forces debug output for this crate; otherwise `RUST_LOG` is used,
/// falling back to warnings only.
pub fn enable_logging(verbose: bool) -> Result<()> {
    let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
    let directives = if verbose {
        format!("{crate_name}=debug")
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("{crate_name}=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(directives)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}
