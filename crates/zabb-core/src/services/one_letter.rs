//! Diagnostic sweep: what does each single letter jump to?

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::ports::OracleClient;

/// A letter and the directory the oracle resolved it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMatch {
    pub letter: char,
    pub path: PathBuf,
}

/// Queries the oracle once for every letter `a` through `z`.
///
/// Independent of any target directory; nothing is compared or deduplicated.
pub struct OneLetterEnumerator {
    oracle: Arc<dyn OracleClient>,
}

impl OneLetterEnumerator {
    pub fn new(oracle: Arc<dyn OracleClient>) -> Self {
        Self { oracle }
    }

    /// Run the sweep, calling `on_match` for each letter that resolved.
    pub fn enumerate_with<F>(&self, mut on_match: F)
    where
        F: FnMut(&LetterMatch),
    {
        for letter in 'a'..='z' {
            let mut buf = [0u8; 4];
            match self.oracle.query(letter.encode_utf8(&mut buf)) {
                Ok(path) => on_match(&LetterMatch { letter, path }),
                Err(e) => debug!(%letter, error = %e, "letter did not resolve"),
            }
        }
    }

    /// Run the sweep and collect the results in alphabetical order.
    pub fn enumerate(&self) -> Vec<LetterMatch> {
        let mut matches = Vec::new();
        self.enumerate_with(|m| matches.push(m.clone()));
        matches
    }
}
