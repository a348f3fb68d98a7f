//! Services that drive the oracle.
//!
//! - [`AbbreviationSearchEngine`]: tiered search for verified abbreviations
//! - [`ResultAggregator`]: per-tier deduplication of verified hits
//! - [`OneLetterEnumerator`]: diagnostic `a`..`z` sweep

mod aggregator;
mod one_letter;
mod search;

#[cfg(test)]
mod test_utils;

pub use aggregator::{ResultAggregator, TierHits};
pub use one_letter::{LetterMatch, OneLetterEnumerator};
pub use search::{AbbreviationSearchEngine, SearchReport};
