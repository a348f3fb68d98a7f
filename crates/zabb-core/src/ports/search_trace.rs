//! Diagnostic sink for the search engine.
//!
//! The engine reports every candidate decision here. Whether anything is
//! printed is up to the injected implementation, so the algorithm never
//! consults a debug flag itself.

use std::path::Path;

use super::{OracleError, PathResolveError};
use crate::domain::Candidate;

/// Why a candidate did not become an abbreviation.
#[derive(Debug, Clone, Copy)]
pub enum SkipReason<'a> {
    /// Rejected by the safety filter; the oracle was never called.
    Dangerous,
    /// The oracle query failed or returned nothing.
    QueryFailed(&'a OracleError),
    /// The oracle returned a path that no longer exists.
    Unresolvable(&'a PathResolveError),
    /// The oracle resolved to a different directory.
    Mismatch { resolved: &'a Path },
}

/// Sink for per-candidate search events.
pub trait SearchTrace: Send + Sync {
    /// A new tier of candidates is about to be tried.
    fn tier_started(&self, length: usize, candidates: usize);

    /// A candidate was skipped.
    fn candidate_skipped(&self, candidate: &Candidate<'_>, reason: SkipReason<'_>);

    /// A candidate resolved to the target.
    fn candidate_matched(&self, candidate: &Candidate<'_>, resolved: &Path);
}

/// A trace sink that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTrace;

impl SearchTrace for NoopTrace {
    fn tier_started(&self, _length: usize, _candidates: usize) {}

    fn candidate_skipped(&self, _candidate: &Candidate<'_>, _reason: SkipReason<'_>) {}

    fn candidate_matched(&self, _candidate: &Candidate<'_>, _resolved: &Path) {}
}
