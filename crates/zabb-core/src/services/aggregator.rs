//! Collects verified abbreviations tier by tier.

/// Deduplicated abbreviations of one length, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierHits {
    pub length: usize,
    pub abbreviations: Vec<String>,
}

/// Accumulates `(tier, text)` matches in discovery order.
///
/// Within a tier, a text seen twice is kept only at its first position.
/// The same substring can occur at several offsets of a basename, e.g.
/// `"s"` in `"sessions"`.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    tiers: Vec<TierHits>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verified match. Tiers must be recorded in ascending order.
    pub fn record(&mut self, length: usize, text: &str) {
        match self.tiers.last_mut() {
            Some(tier) if tier.length == length => {
                if !tier.abbreviations.iter().any(|a| a == text) {
                    tier.abbreviations.push(text.to_string());
                }
            }
            _ => {
                debug_assert!(self.tiers.last().is_none_or(|t| t.length < length));
                self.tiers.push(TierHits {
                    length,
                    abbreviations: vec![text.to_string()],
                });
            }
        }
    }

    /// Hits recorded for `length`, if any.
    pub fn tier(&self, length: usize) -> Option<&TierHits> {
        self.tiers.iter().find(|t| t.length == length)
    }

    /// Whether any tier recorded a match.
    pub fn any_match(&self) -> bool {
        !self.tiers.is_empty()
    }

    pub fn tiers(&self) -> &[TierHits] {
        &self.tiers
    }

    pub fn into_tiers(self) -> Vec<TierHits> {
        self.tiers
    }
}
