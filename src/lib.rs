//! UNIX shell-style glob pattern matching.
//!
//! This crate matches glob patterns against strings under a configurable [`MatchMode`]:
//! the whole string, the shortest or longest matching prefix, or the shortest or longest
//! matching suffix.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one UTF-8 character
//! - `[abc]`, `[a-z]` - Matches one character from the set or range
//! - `[!a-z]`, `[^a-z]` - Matches one character not in the set or range
//! - `\x` - Matches `x` literally, suppressing any special meaning
//! - Any other character matches itself
//! - A trailing `\` without a following character is treated as a literal backslash
//!
//! # Examples
//!
//! ```
//! use shglob::Glob;
//!
//! let glob = Glob::new("*.txt");
//! assert!(glob.is_match("readme.txt").unwrap());
//! assert!(!glob.is_match("readme.md").unwrap());
//!
//! // Prefix and suffix positions are byte offsets into the input.
//! let glob = Glob::new("0*5");
//! assert_eq!(glob.match_shortest_prefix("0123456789").unwrap(), Some(6));
//! assert_eq!(glob.match_shortest_suffix("011115012225").unwrap(), Some(6));
//! ```
//!
//! # Match Modes
//!
//! A [`MatchMode`] is a set of [`MatchFlag`] values. The supported combinations are
//! [`MATCH_WHOLE_STRING`], [`SHORTEST_PREFIX`], [`LONGEST_PREFIX`], [`SHORTEST_SUFFIX`]
//! and [`LONGEST_SUFFIX`]. Whole-string matching may also carry a single greediness flag.
//! Other combinations, including a prefix or suffix anchor without a greediness flag,
//! are rejected with [`Error::UnsupportedMode`].
//!
//! A `*` at the very end of a pattern always matches as many characters as possible.
//!
//! ```
//! use shglob::{CompiledMatcher, SHORTEST_PREFIX};
//!
//! let matcher = CompiledMatcher::compile("012*", SHORTEST_PREFIX).unwrap();
//! assert_eq!(matcher.match_with_position("0123456789"), Some(10));
//! ```

// public modules
pub mod error;
pub mod mode;

// private modules
mod glob;
mod matcher;
mod parse;
mod shortcuts;
mod translate;

// public uses
pub use error::{Error, Result};
pub use glob::Glob;
pub use matcher::CompiledMatcher;
pub use mode::{
    LONGEST_PREFIX, LONGEST_SUFFIX, MATCH_WHOLE_STRING, MatchFlag, MatchMode, SHORTEST_PREFIX, SHORTEST_SUFFIX,
    Strategy,
};
pub use parse::{Segment, SegmentKind, parse};
pub use shortcuts::{
    match_longest_prefix, match_longest_suffix, match_prefix, match_shortest_prefix, match_shortest_suffix, match_suffix,
    matches,
};
pub use translate::translate;
