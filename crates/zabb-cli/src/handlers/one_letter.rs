//! Single-letter sweep handler.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print `<letter> <path>` for every letter the oracle resolves.
///
/// Letters that do not resolve are left out. Always succeeds unless
/// writing fails.
pub fn execute(ctx: &CliContext, out: &mut impl Write) -> Result<(), CliError> {
    let mut result = Ok(());
    ctx.one_letter().enumerate_with(|m| {
        if result.is_ok() {
            result = writeln!(out, "{} {}", m.letter, m.path.display());
        }
    });
    result?;
    out.flush()?;
    Ok(())
}
