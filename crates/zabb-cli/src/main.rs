//! CLI entry point.
//!
//! Loads `.env`, parses arguments, installs logging, runs the command and
//! turns the outcome into an exit code. Everything else lives in the
//! library.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use zabb_cli::{Cli, CliError, load_env, logging, run};

fn main() -> ExitCode {
    // Before parsing: clap reads ZABB_BACKEND, logging reads RUST_LOG.
    let env_file = load_env();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are "errors" that go to stdout.
        Err(e) if !e.use_stderr() => {
            let mut stdout = std::io::stdout();
            return match write!(stdout, "{}", e.render()).and_then(|()| stdout.flush()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(io) => report(&CliError::from(io)),
            };
        }
        Err(e) => return report(&CliError::Arguments(e.render().to_string())),
    };

    if let Err(e) = logging::init(cli.debug) {
        return report(&CliError::Internal(format!("{e:#}")));
    }
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Print `err` on stderr and return its exit code.
fn report(err: &CliError) -> ExitCode {
    match err {
        // clap's message already carries its own "error:" prefix and usage.
        CliError::Arguments(msg) => eprint!("{msg}"),
        other => eprintln!("zabb: {other}"),
    }
    ExitCode::from(err.exit_code())
}
