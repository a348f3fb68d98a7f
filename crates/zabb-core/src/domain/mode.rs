//! Search modes selectable from the command line.

use std::fmt;

/// Which candidates are generated and when the search stops.
///
/// Only the documented combinations exist: prefix search always stops at
/// the first successful tier, and exhaustive search always covers every
/// offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Prefixes only; stop after the first tier with a hit.
    #[default]
    Prefix,
    /// Every offset; stop after the first tier with a hit.
    Shortest,
    /// Every offset at every length.
    All,
}

impl SearchMode {
    /// Resolve the mode from the `--shortest` / `--all` flags.
    ///
    /// `all` implies `shortest`.
    pub const fn from_flags(shortest: bool, all: bool) -> Self {
        match (shortest, all) {
            (_, true) => Self::All,
            (true, false) => Self::Shortest,
            (false, false) => Self::Prefix,
        }
    }

    /// Whether candidates start at every offset instead of only at 0.
    pub const fn searches_all_offsets(self) -> bool {
        matches!(self, Self::Shortest | Self::All)
    }

    /// Whether tiers after the first successful one are still searched.
    pub const fn is_exhaustive(self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Prefix => "prefix",
            Self::Shortest => "shortest",
            Self::All => "all",
        };
        f.write_str(name)
    }
}
