//! Core domain for zabb: find the shortest query a directory-jump tool
//! resolves to a given directory.
//!
//! The crate is pure apart from path canonicalization. The jump tool itself
//! sits behind the [`ports::OracleClient`] port and is implemented in
//! `zabb-runtime`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod safety;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Candidate, CandidateGenerator, DirectoryTarget, SearchMode, Tier};
pub use paths::FsPathResolver;
pub use ports::{
    CoreError, NoopTrace, OracleClient, OracleError, OracleResult, PathResolveError,
    PathResolver, SearchTrace, SkipReason,
};
pub use safety::is_dangerous;
pub use services::{
    AbbreviationSearchEngine, LetterMatch, OneLetterEnumerator, ResultAggregator, SearchReport,
    TierHits,
};
