//! Command handlers.
//!
//! Handlers are thin: they take a [`CliContext`](crate::CliContext), call
//! into zabb-core, and format results onto the given writer.

pub mod completions;
pub mod one_letter;
pub mod search;

#[cfg(test)]
mod test_support;
