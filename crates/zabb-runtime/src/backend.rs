//! Supported jump-tool backends and their discovery.
//!
//! Discovery runs once per process, in bootstrap. The result is passed on
//! explicitly; nothing here caches or mutates global state.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use zabb_core::CoreError;

/// A jump tool that can act as the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// `zoxide query <text>`
    Zoxide,
    /// `autojump <text>`
    Autojump,
}

impl Backend {
    /// Every backend, in discovery preference order.
    pub const ALL: [Self; 2] = [Self::Zoxide, Self::Autojump];

    /// Executable name looked up on `PATH`.
    pub const fn program(self) -> &'static str {
        match self {
            Self::Zoxide => "zoxide",
            Self::Autojump => "autojump",
        }
    }

    /// Arguments that make the tool print its best match for `text`.
    pub fn query_args(self, text: &str) -> Vec<&str> {
        match self {
            Self::Zoxide => vec!["query", text],
            Self::Autojump => vec![text],
        }
    }

    /// Output the tool prints in place of a path when nothing matched.
    ///
    /// autojump exits 0 and prints `.` on a miss.
    pub const fn no_match_sentinel(self) -> Option<&'static str> {
        match self {
            Self::Zoxide => None,
            Self::Autojump => Some("."),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Errors from backend discovery.
#[derive(Debug, Error)]
pub enum BackendError {
    /// None of the supported tools are on `PATH`.
    #[error("no supported jump tool found on PATH (tried: {tried}); install zoxide or autojump")]
    NoneInstalled { tried: String },

    /// The explicitly requested tool is not on `PATH`.
    #[error("{backend} was requested but is not installed")]
    NotInstalled { backend: Backend },
}

impl From<BackendError> for CoreError {
    fn from(err: BackendError) -> Self {
        Self::OracleUnavailable(err.to_string())
    }
}

/// A backend together with the executable that will be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledBackend {
    pub backend: Backend,
    pub program: PathBuf,
}

/// Find a backend on the process `PATH`.
///
/// With `preferred` set only that backend is considered; otherwise the
/// first installed one in [`Backend::ALL`] order wins.
pub fn discover(preferred: Option<Backend>) -> Result<InstalledBackend, BackendError> {
    let path = std::env::var_os("PATH").unwrap_or_default();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    discover_in(preferred, &path, &cwd)
}

/// Like [`discover`], searching an explicit `PATH` value.
pub fn discover_in(
    preferred: Option<Backend>,
    search_path: &OsStr,
    cwd: &Path,
) -> Result<InstalledBackend, BackendError> {
    let lookup = |backend: Backend| {
        which::which_in(backend.program(), Some(search_path), cwd)
            .ok()
            .map(|program| InstalledBackend { backend, program })
    };

    if let Some(backend) = preferred {
        return lookup(backend).ok_or(BackendError::NotInstalled { backend });
    }

    for backend in Backend::ALL {
        if let Some(installed) = lookup(backend) {
            debug!(%backend, program = %installed.program.display(), "discovered jump backend");
            return Ok(installed);
        }
    }

    let tried = Backend::ALL
        .iter()
        .map(|b| b.program())
        .collect::<Vec<_>>()
        .join(", ");
    Err(BackendError::NoneInstalled { tried })
}
