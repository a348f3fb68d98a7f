//! Filesystem-backed path canonicalization.

use std::path::{Path, PathBuf};

use crate::ports::{PathResolveError, PathResolver};

/// Canonicalizes through the real filesystem, following symlinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathResolver;

impl PathResolver for FsPathResolver {
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, PathResolveError> {
        std::fs::canonicalize(path).map_err(|e| PathResolveError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
