//! Domain types for the abbreviation search.

mod candidate;
mod mode;
mod target;

pub use candidate::{Candidate, CandidateGenerator, Tier};
pub use mode::SearchMode;
pub use target::DirectoryTarget;
