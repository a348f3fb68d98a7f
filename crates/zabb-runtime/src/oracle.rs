//! Process-backed oracle.
//!
//! Each query runs the jump tool once, blocking until it exits. Any
//! failure (spawn error, non-zero exit, empty output) is returned as an
//! [`OracleError`] for the engine to skip.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, trace};
use zabb_core::{OracleClient, OracleError, OracleResult};

use crate::backend::{Backend, InstalledBackend};

/// [`OracleClient`] that shells out to an installed jump tool.
#[derive(Debug, Clone)]
pub struct ProcessOracle {
    backend: Backend,
    program: PathBuf,
}

impl ProcessOracle {
    /// Create an oracle running `program` with `backend`'s query syntax.
    pub fn new(backend: Backend, program: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            program: program.into(),
        }
    }

    pub const fn backend(&self) -> Backend {
        self.backend
    }
}

impl From<InstalledBackend> for ProcessOracle {
    fn from(installed: InstalledBackend) -> Self {
        Self::new(installed.backend, installed.program)
    }
}

impl OracleClient for ProcessOracle {
    fn query(&self, text: &str) -> OracleResult<PathBuf> {
        let output = Command::new(&self.program)
            .args(self.backend.query_args(text))
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| OracleError::Spawn(format!("{}: {e}", self.program.display())))?;

        if !output.status.success() {
            trace!(
                query = text,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "oracle reported no match"
            );
            return Err(OracleError::NonZeroExit {
                code: output.status.code(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = parse_resolved_line(&stdout, self.backend.no_match_sentinel())
            .ok_or(OracleError::EmptyOutput)?;

        debug!(backend = %self.backend, query = text, resolved = line, "oracle resolved");
        Ok(PathBuf::from(line))
    }
}

/// First non-blank line of `stdout`, unless it is the backend's miss marker.
fn parse_resolved_line<'a>(stdout: &'a str, sentinel: Option<&str>) -> Option<&'a str> {
    let line = stdout.lines().map(str::trim).find(|l| !l.is_empty())?;
    if sentinel == Some(line) {
        return None;
    }
    Some(line)
}
