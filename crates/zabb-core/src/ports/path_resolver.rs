//! Path canonicalization port.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A path could not be canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot resolve {path}: {reason}")]
pub struct PathResolveError {
    pub path: PathBuf,
    pub reason: String,
}

/// Port for turning paths into a canonical absolute form.
///
/// Two paths naming the same filesystem location must canonicalize to
/// the same value. Paths that do not exist must fail.
pub trait PathResolver: Send + Sync {
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, PathResolveError>;
}
