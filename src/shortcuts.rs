//! One-shot matching functions.
//!
//! Each call compiles a fresh matcher. Reuse a [`Glob`](crate::Glob) or a
//! [`CompiledMatcher`] when matching the same pattern repeatedly.

// local imports
use crate::error::Result;
use crate::matcher::CompiledMatcher;
use crate::mode::{MATCH_WHOLE_STRING, MatchFlag, MatchMode, greediness};

// ---

/// Tests whether the whole input matches the glob pattern.
///
/// # Examples
///
/// ```
/// assert!(shglob::matches("0123456789", "0?23456789").unwrap());
/// assert!(!shglob::matches("0123456789", "1?34567890").unwrap());
/// ```
pub fn matches(input: &str, pattern: &str) -> Result<bool> {
    Ok(CompiledMatcher::compile(pattern, MATCH_WHOLE_STRING)?.matches(input))
}

/// Returns the length of the prefix of input that matches the glob pattern.
///
/// Only the greediness flags of `mode` are taken into account:
/// [`MatchFlag::LongestMatch`] selects the longest prefix, otherwise the shortest one is returned.
/// Both greediness flags together are rejected.
///
/// # Examples
///
/// ```
/// use shglob::{MatchFlag, match_prefix};
///
/// assert_eq!(match_prefix("0123456789", "0*5", MatchFlag::ShortestMatch.into()).unwrap(), Some(6));
/// assert_eq!(match_prefix("012345012345", "0*5", MatchFlag::LongestMatch.into()).unwrap(), Some(12));
/// ```
pub fn match_prefix(input: &str, pattern: &str, mode: MatchMode) -> Result<Option<usize>> {
    let matcher = CompiledMatcher::compile(pattern, greediness_or_shortest(mode) | MatchFlag::AnchorPrefix)?;
    Ok(matcher.match_with_position(input))
}

/// Returns the start of the suffix of input that matches the glob pattern.
///
/// Only the greediness flags of `mode` are taken into account:
/// [`MatchFlag::LongestMatch`] selects the longest suffix, otherwise the shortest one is returned.
/// Both greediness flags together are rejected.
/// Looking for the shortest suffix is the most expensive operation of the crate.
///
/// # Examples
///
/// ```
/// use shglob::{MatchFlag, match_suffix};
///
/// assert_eq!(match_suffix("011115012225", "0*5", MatchFlag::ShortestMatch.into()).unwrap(), Some(6));
/// assert_eq!(match_suffix("012345012345", "0*5", MatchFlag::LongestMatch.into()).unwrap(), Some(0));
/// ```
pub fn match_suffix(input: &str, pattern: &str, mode: MatchMode) -> Result<Option<usize>> {
    let matcher = CompiledMatcher::compile(pattern, greediness_or_shortest(mode) | MatchFlag::AnchorSuffix)?;
    Ok(matcher.match_with_position(input))
}

/// Returns the length of the shortest prefix of input that matches the glob pattern.
pub fn match_shortest_prefix(input: &str, pattern: &str) -> Result<Option<usize>> {
    match_prefix(input, pattern, MatchFlag::ShortestMatch.into())
}

/// Returns the length of the longest prefix of input that matches the glob pattern.
pub fn match_longest_prefix(input: &str, pattern: &str) -> Result<Option<usize>> {
    match_prefix(input, pattern, MatchFlag::LongestMatch.into())
}

/// Returns the start of the shortest suffix of input that matches the glob pattern.
pub fn match_shortest_suffix(input: &str, pattern: &str) -> Result<Option<usize>> {
    match_suffix(input, pattern, MatchFlag::ShortestMatch.into())
}

/// Returns the start of the longest suffix of input that matches the glob pattern.
pub fn match_longest_suffix(input: &str, pattern: &str) -> Result<Option<usize>> {
    match_suffix(input, pattern, MatchFlag::LongestMatch.into())
}

fn greediness_or_shortest(mode: MatchMode) -> MatchMode {
    match greediness(mode) {
        greediness if greediness.is_empty() => MatchFlag::ShortestMatch.into(),
        greediness => greediness,
    }
}
