//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
fn default_directives(debug: bool) -> &'static str {
    if debug {
        "warn,zabb_core=debug,zabb_runtime=debug,zabb_cli=debug"
    } else {
        "warn"
    }
}

/// Install a stderr subscriber. `RUST_LOG`, when set, wins over `debug`.
pub fn init(debug: bool) -> Result<()> {
    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::try_from_default_env().context("invalid RUST_LOG filter")?
    } else {
        EnvFilter::new(default_directives(debug))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}
