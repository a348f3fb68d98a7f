//! Abbreviation search handler.

use std::io::Write;
use std::path::Path;

use zabb_core::SearchMode;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Search for abbreviations of `dir` and print one per line.
///
/// Tiers are written as soon as they complete, so `--all` output streams.
///
/// # Errors
///
/// - [`CliError::InvalidTarget`] if `dir` is not an existing directory
/// - [`CliError::NoAbbreviationFound`] if nothing resolved back to `dir`
pub fn execute(
    ctx: &CliContext,
    dir: &Path,
    mode: SearchMode,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut write_error = None;
    let report = ctx.search_engine().search_with(dir, mode, |hits| {
        if write_error.is_some() {
            return;
        }
        let written = hits
            .abbreviations
            .iter()
            .try_for_each(|abbreviation| writeln!(out, "{abbreviation}"))
            .and_then(|()| out.flush());
        if let Err(e) = written {
            write_error = Some(e);
        }
    })?;

    if let Some(e) = write_error {
        return Err(e.into());
    }
    if report.is_empty() {
        return Err(CliError::NoAbbreviationFound(report.target().path().to_path_buf()));
    }
    Ok(())
}
