//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together:
//! - `.env` loading and backend discovery (once per process)
//! - The process-backed oracle (via zabb-runtime)
//! - The trace sink chosen by `--debug`
//!
//! Handlers receive the composed [`CliContext`] and never discover
//! anything themselves.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;
use zabb_core::{
    AbbreviationSearchEngine, FsPathResolver, NoopTrace, OneLetterEnumerator, OracleClient,
    PathResolver, SearchTrace,
};
use zabb_runtime::{InstalledBackend, LogTrace, ProcessOracle, discover};

use crate::error::CliError;
use crate::parser::Cli;

/// Load `.env` from the working directory or its parents.
///
/// Must run before argument parsing so `ZABB_BACKEND` and `RUST_LOG`
/// set there are seen. A missing file is the normal case and yields `None`.
pub fn load_env() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// The jump tool every query goes to.
    pub backend: InstalledBackend,
    /// Whether per-candidate diagnostics are traced.
    pub debug: bool,
}

impl CliConfig {
    /// Discover the backend requested by `cli`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::OracleUnavailable`] if no usable jump tool is
    /// installed.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let backend = discover(cli.backend.map(Into::into))?;
        debug!(
            backend = %backend.backend,
            program = %backend.program.display(),
            "using jump backend"
        );

        Ok(Self {
            backend,
            debug: cli.debug,
        })
    }
}

/// Composed dependencies for command handlers.
pub struct CliContext {
    pub oracle: Arc<dyn OracleClient>,
    pub resolver: Arc<dyn PathResolver>,
    pub trace: Arc<dyn SearchTrace>,
}

impl CliContext {
    /// Build a context around an arbitrary oracle.
    pub fn new(oracle: Arc<dyn OracleClient>, debug: bool) -> Self {
        let trace: Arc<dyn SearchTrace> = if debug {
            Arc::new(LogTrace)
        } else {
            Arc::new(NoopTrace)
        };

        Self {
            oracle,
            resolver: Arc::new(FsPathResolver),
            trace,
        }
    }

    /// The abbreviation search engine over this context's oracle.
    pub fn search_engine(&self) -> AbbreviationSearchEngine {
        AbbreviationSearchEngine::new(
            Arc::clone(&self.oracle),
            Arc::clone(&self.resolver),
            Arc::clone(&self.trace),
        )
    }

    /// The single-letter diagnostic sweep over this context's oracle.
    pub fn one_letter(&self) -> OneLetterEnumerator {
        OneLetterEnumerator::new(Arc::clone(&self.oracle))
    }
}

/// Wire the runtime oracle for `config`.
pub fn bootstrap(config: &CliConfig) -> CliContext {
    let oracle = ProcessOracle::from(config.backend.clone());
    CliContext::new(Arc::new(oracle), config.debug)
}
