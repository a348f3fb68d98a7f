//! Oracle port: the external directory-jump tool.
//!
//! Implementations wrap a concrete jump-history command (see
//! `zabb-runtime`). The engine treats every call as a black box with
//! exactly two outcomes.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single oracle query produced no usable path.
///
/// All variants mean the same thing to the engine: skip this candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The backing command could not be started.
    #[error("Failed to run oracle: {0}")]
    Spawn(String),

    /// The backing command exited unsuccessfully (usually "no match").
    #[error("Oracle exited with status {code:?}")]
    NonZeroExit { code: Option<i32> },

    /// The backing command succeeded but printed nothing.
    #[error("Oracle produced no output")]
    EmptyOutput,
}

/// Result type for oracle queries.
pub type OracleResult<T> = Result<T, OracleError>;

/// Port for querying a directory-jump tool.
///
/// Calls are synchronous and blocking. The oracle's ranking may change
/// between calls, so results are not assumed to be stable.
#[cfg_attr(test, mockall::automock)]
pub trait OracleClient: Send + Sync {
    /// Resolve `text` to the oracle's best matching directory.
    fn query(&self, text: &str) -> OracleResult<PathBuf>;
}
