//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use zabb_core::SearchMode;
use zabb_runtime::Backend;

/// Find the shortest query your directory-jump tool resolves to a directory.
///
/// Each candidate is checked by actually querying the jump tool, so the
/// answer reflects its current ranking.
#[derive(Debug, Parser)]
#[command(name = "zabb")]
#[command(version)]
pub struct Cli {
    /// Directory to abbreviate [default: current directory]
    pub dir: Option<PathBuf>,

    /// Try substrings at every position, not just prefixes
    #[arg(short = 's', long)]
    pub shortest: bool,

    /// Report every working abbreviation at every length (implies --shortest)
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Show where each single letter a-z jumps to
    #[arg(
        short = '1',
        long = "one-letter",
        conflicts_with_all = ["dir", "shortest", "all"]
    )]
    pub one_letter: bool,

    /// Explain on stderr why each candidate was skipped
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Jump tool to query [default: first installed of zoxide, autojump]
    #[arg(long, env = "ZABB_BACKEND", value_enum)]
    pub backend: Option<BackendArg>,

    /// Print a completion script for SHELL and exit
    #[arg(
        long,
        value_name = "SHELL",
        conflicts_with_all = ["dir", "shortest", "all", "one_letter"]
    )]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Search mode selected by `--shortest` / `--all`.
    pub const fn mode(&self) -> SearchMode {
        SearchMode::from_flags(self.shortest, self.all)
    }
}

/// Backend names accepted by `--backend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Zoxide,
    Autojump,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Zoxide => Self::Zoxide,
            BackendArg::Autojump => Self::Autojump,
        }
    }
}
