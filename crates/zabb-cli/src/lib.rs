//! Command-line adapter for zabb.
//!
//! `main.rs` parses arguments and maps errors to exit codes; everything
//! else lives here so it can be tested without spawning the binary.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

pub use bootstrap::{CliConfig, CliContext, bootstrap, load_env};
pub use error::CliError;
pub use parser::{BackendArg, Cli};

use std::io::Write;

/// Run a parsed command line, writing results to `out`.
///
/// Backend discovery happens first, so a host without a jump tool fails
/// before the target directory is even looked at.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    if let Some(shell) = cli.completions {
        handlers::completions::execute(shell, out)?;
        return Ok(());
    }

    let config = CliConfig::from_cli(cli)?;
    let ctx = bootstrap(&config);

    if cli.one_letter {
        return handlers::one_letter::execute(&ctx, out);
    }

    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(|e| CliError::InvalidTarget {
            path: ".".into(),
            reason: e.to_string(),
        })?,
    };
    handlers::search::execute(&ctx, &dir, cli.mode(), out)
}
