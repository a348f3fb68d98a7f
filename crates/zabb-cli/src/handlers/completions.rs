//! Shell completion script generation.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::error::CliError;
use crate::parser::Cli;

/// Write the completion script for `shell` to `out`.
pub fn execute(shell: Shell, out: &mut impl Write) -> Result<(), CliError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}
