//! Candidates that must never be handed to the oracle.

/// Query strings the jump tools parse as their own options.
const ORACLE_FLAGS: [&str; 2] = ["-i", "-s"];

/// Whether `candidate` is unsafe to pass to the oracle as a query.
///
/// Rejects whitespace anywhere (the oracle would split the token),
/// the oracle's own flags, and anything starting with `~` (home-directory
/// expansion). Empty strings are rejected too; the generator never
/// produces them.
pub fn is_dangerous(candidate: &str) -> bool {
    candidate.is_empty()
        || candidate.chars().any(char::is_whitespace)
        || ORACLE_FLAGS.contains(&candidate)
        || candidate.starts_with('~')
}
