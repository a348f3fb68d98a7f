//! Lazy enumeration of candidate fragments.
//!
//! A basename of `N` characters produces `N` tiers, one per length.
//! Each tier is itself a lazy sequence, so the engine can stop part-way
//! through without generating anything it will not query.

use std::rc::Rc;

/// A contiguous substring of the basename, measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub offset: usize,
    pub length: usize,
    pub text: &'a str,
}

/// Iterator over tiers of increasing length.
///
/// Offsets and lengths count `char`s, not bytes, so non-ASCII directory
/// names never produce a slice that splits a character.
#[derive(Debug)]
pub struct CandidateGenerator<'a> {
    text: &'a str,
    /// Byte position of every char start, plus `text.len()`.
    bounds: Rc<[usize]>,
    all_offsets: bool,
    next_length: usize,
}

impl<'a> CandidateGenerator<'a> {
    /// Create a generator over `text`.
    ///
    /// With `all_offsets` false only prefixes are produced.
    pub fn new(text: &'a str, all_offsets: bool) -> Self {
        let bounds: Rc<[usize]> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();

        Self {
            text,
            bounds,
            all_offsets,
            next_length: 1,
        }
    }

    /// Number of characters in the basename.
    pub fn char_len(&self) -> usize {
        self.bounds.len() - 1
    }
}

impl<'a> Iterator for CandidateGenerator<'a> {
    type Item = Tier<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.char_len();
        if self.next_length > n {
            return None;
        }

        let length = self.next_length;
        self.next_length += 1;

        let last_offset = if self.all_offsets { n - length } else { 0 };
        Some(Tier {
            text: self.text,
            bounds: Rc::clone(&self.bounds),
            length,
            next_offset: 0,
            last_offset,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.char_len() + 1).saturating_sub(self.next_length);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CandidateGenerator<'_> {}

/// All candidates of one length, in ascending offset order.
#[derive(Debug)]
pub struct Tier<'a> {
    text: &'a str,
    bounds: Rc<[usize]>,
    length: usize,
    next_offset: usize,
    last_offset: usize,
}

impl Tier<'_> {
    /// Length shared by every candidate in this tier.
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl<'a> Iterator for Tier<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_offset > self.last_offset {
            return None;
        }

        let offset = self.next_offset;
        self.next_offset += 1;

        let start = self.bounds[offset];
        let end = self.bounds[offset + self.length];
        Some(Candidate {
            offset,
            length: self.length,
            text: &self.text[start..end],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_offset + 1).saturating_sub(self.next_offset);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Tier<'_> {}
