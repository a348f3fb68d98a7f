//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the search engine expects from
//! infrastructure. They contain no process or shell details.
//!
//! # Design Rules
//!
//! - The oracle is opaque: one query in, one path or one failure out
//! - Per-candidate failures are values, never panics
//! - Only pre-search conditions are expressed as [`CoreError`]

pub mod oracle;
pub mod path_resolver;
pub mod search_trace;

use std::path::PathBuf;

use thiserror::Error;

pub use oracle::{OracleClient, OracleError, OracleResult};
pub use path_resolver::{PathResolveError, PathResolver};
pub use search_trace::{NoopTrace, SearchTrace, SkipReason};

#[cfg(test)]
pub use oracle::MockOracleClient;

/// Core error type for conditions that abort a search before it starts.
///
/// Adapters map this to their own error types (CLI exit codes).
/// Failures of individual oracle queries are never reported through
/// this type; the engine absorbs them.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No supported jump backend is installed on this host.
    #[error("Oracle unavailable: {0}")]
    OracleUnavailable(String),

    /// The requested directory does not exist or is not a directory.
    #[error("Invalid target directory {path}: {reason}")]
    InvalidTarget { path: PathBuf, reason: String },
}
