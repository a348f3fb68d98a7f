//! Tiered abbreviation search.
//!
//! For each length from 1 to the basename length, every candidate of that
//! length is filtered, queried, canonicalized and compared against the
//! target. Hits are aggregated per tier. Outside exhaustive mode the
//! search ends with the first tier that produced a hit.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::aggregator::{ResultAggregator, TierHits};
use crate::domain::{Candidate, CandidateGenerator, DirectoryTarget, SearchMode};
use crate::ports::{CoreError, OracleClient, PathResolver, SearchTrace, SkipReason};
use crate::safety::is_dangerous;

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    target: DirectoryTarget,
    tiers: Vec<TierHits>,
}

impl SearchReport {
    /// The canonical target that was searched for.
    pub const fn target(&self) -> &DirectoryTarget {
        &self.target
    }

    /// Tiers that produced at least one abbreviation, shortest first.
    pub fn tiers(&self) -> &[TierHits] {
        &self.tiers
    }

    /// Every abbreviation in output order.
    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.tiers
            .iter()
            .flat_map(|t| t.abbreviations.iter().map(String::as_str))
    }

    /// True when no abbreviation was verified.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

/// Drives candidate generation, filtering, oracle queries and verification.
///
/// The oracle, path resolver and trace sink are injected; the engine does
/// not discover backends or read flags itself.
pub struct AbbreviationSearchEngine {
    oracle: Arc<dyn OracleClient>,
    resolver: Arc<dyn PathResolver>,
    trace: Arc<dyn SearchTrace>,
}

impl AbbreviationSearchEngine {
    pub fn new(
        oracle: Arc<dyn OracleClient>,
        resolver: Arc<dyn PathResolver>,
        trace: Arc<dyn SearchTrace>,
    ) -> Self {
        Self {
            oracle,
            resolver,
            trace,
        }
    }

    /// Search for abbreviations of the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTarget`] if `path` is not an existing
    /// directory. Failed oracle queries are never errors.
    pub fn search(&self, path: &Path, mode: SearchMode) -> Result<SearchReport, CoreError> {
        self.search_with(path, mode, |_| {})
    }

    /// Like [`search`](Self::search), calling `on_tier` as soon as each
    /// successful tier completes.
    pub fn search_with<F>(
        &self,
        path: &Path,
        mode: SearchMode,
        mut on_tier: F,
    ) -> Result<SearchReport, CoreError>
    where
        F: FnMut(&TierHits),
    {
        let target = DirectoryTarget::resolve(path, self.resolver.as_ref())?;
        debug!(
            target = %target.path().display(),
            basename = target.basename(),
            %mode,
            "starting abbreviation search"
        );

        let mut aggregator = ResultAggregator::new();
        for tier in CandidateGenerator::new(target.basename(), mode.searches_all_offsets()) {
            let length = tier.length();
            self.trace.tier_started(length, tier.len());

            for candidate in tier {
                if self.verify(&target, &candidate) {
                    aggregator.record(length, candidate.text);
                }
            }

            if let Some(hits) = aggregator.tier(length) {
                on_tier(hits);
                if !mode.is_exhaustive() {
                    break;
                }
            }
        }

        debug!(
            tiers = aggregator.tiers().len(),
            found = aggregator.any_match(),
            "abbreviation search finished"
        );

        Ok(SearchReport {
            target,
            tiers: aggregator.into_tiers(),
        })
    }

    /// Whether `candidate` resolves through the oracle to `target`.
    fn verify(&self, target: &DirectoryTarget, candidate: &Candidate<'_>) -> bool {
        if is_dangerous(candidate.text) {
            self.trace.candidate_skipped(candidate, SkipReason::Dangerous);
            return false;
        }

        let resolved = match self.oracle.query(candidate.text) {
            Ok(resolved) => resolved,
            Err(e) => {
                self.trace
                    .candidate_skipped(candidate, SkipReason::QueryFailed(&e));
                return false;
            }
        };

        let canonical = match self.resolver.canonicalize(&resolved) {
            Ok(canonical) => canonical,
            Err(e) => {
                self.trace
                    .candidate_skipped(candidate, SkipReason::Unresolvable(&e));
                return false;
            }
        };

        if canonical == target.path() {
            self.trace.candidate_matched(candidate, &canonical);
            true
        } else {
            self.trace.candidate_skipped(
                candidate,
                SkipReason::Mismatch {
                    resolved: &canonical,
                },
            );
            false
        }
    }
}
