//! The directory a search is trying to reach.

use std::path::{Path, PathBuf};

use crate::ports::{CoreError, PathResolver};

/// A canonical, existing directory and its lower-cased basename.
///
/// Both values are computed once in [`DirectoryTarget::resolve`] and never
/// change for the lifetime of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryTarget {
    path: PathBuf,
    basename: String,
}

impl DirectoryTarget {
    /// Canonicalize `path` and derive the search basename.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTarget`] if the path cannot be
    /// canonicalized or does not name a directory.
    pub fn resolve(path: &Path, resolver: &dyn PathResolver) -> Result<Self, CoreError> {
        let canonical = resolver
            .canonicalize(path)
            .map_err(|e| CoreError::InvalidTarget {
                path: path.to_path_buf(),
                reason: e.reason,
            })?;

        if !canonical.is_dir() {
            return Err(CoreError::InvalidTarget {
                path: path.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }

        // The filesystem root has no final segment; an empty basename
        // simply yields no candidates.
        let basename = canonical
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Ok(Self {
            path: canonical,
            basename,
        })
    }

    /// The canonical path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The lower-cased final path segment.
    pub fn basename(&self) -> &str {
        &self.basename
    }
}
