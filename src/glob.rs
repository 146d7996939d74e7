// std imports
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

// local imports
use crate::error::Result;
use crate::matcher::CompiledMatcher;
use crate::mode::{LONGEST_PREFIX, LONGEST_SUFFIX, MATCH_WHOLE_STRING, MatchMode, SHORTEST_PREFIX, SHORTEST_SUFFIX};
use crate::parse::{Segment, parse};

/// A parsed glob pattern, which can safely be reused.
///
/// The pattern is parsed once, and a [`CompiledMatcher`] is built on first use for each
/// distinct [`MatchMode`] and kept for the lifetime of the `Glob`.
///
/// # Examples
///
/// ```
/// use shglob::Glob;
///
/// let glob = Glob::new("0*5");
/// assert!(glob.is_match("012345").unwrap());
/// assert_eq!(glob.match_shortest_prefix("012345012345").unwrap(), Some(6));
/// assert_eq!(glob.match_longest_prefix("012345012345").unwrap(), Some(12));
/// assert_eq!(glob.match_shortest_suffix("011115012225").unwrap(), Some(6));
/// assert_eq!(glob.match_longest_suffix("012345012345").unwrap(), Some(0));
/// ```
pub struct Glob {
    pattern: String,
    segments: Vec<Segment>,
    compiled: Mutex<HashMap<MatchMode, Arc<CompiledMatcher>>>,
}

impl Glob {
    /// Parses the pattern.
    ///
    /// This function is infallible; problems in the pattern are reported
    /// when it is first compiled for a mode.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let segments = parse(&pattern);
        Self {
            pattern,
            segments,
            compiled: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the original pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the matcher for the given mode, compiling it if needed.
    ///
    /// Repeated calls with the same mode return the same matcher.
    pub fn compiled(&self, mode: MatchMode) -> Result<Arc<CompiledMatcher>> {
        let mut compiled = self.compiled.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(matcher) = compiled.get(&mode) {
            log::trace!("reusing compiled glob {:?} for {mode:?}", self.pattern);
            return Ok(matcher.clone());
        }

        let matcher = Arc::new(CompiledMatcher::from_segments(&self.pattern, &self.segments, mode)?);
        compiled.insert(mode, matcher.clone());
        Ok(matcher)
    }

    /// Returns the match position under the given mode, or `None` if the input does not match.
    pub fn match_with_mode(&self, input: &str, mode: MatchMode) -> Result<Option<usize>> {
        Ok(self.compiled(mode)?.match_with_position(input))
    }

    /// Tests whether the whole input matches the pattern.
    pub fn is_match(&self, input: &str) -> Result<bool> {
        Ok(self.compiled(MATCH_WHOLE_STRING)?.matches(input))
    }

    /// Returns the length of the shortest prefix of the input matching the pattern.
    pub fn match_shortest_prefix(&self, input: &str) -> Result<Option<usize>> {
        self.match_with_mode(input, SHORTEST_PREFIX)
    }

    /// Returns the length of the longest prefix of the input matching the pattern.
    pub fn match_longest_prefix(&self, input: &str) -> Result<Option<usize>> {
        self.match_with_mode(input, LONGEST_PREFIX)
    }

    /// Returns the start of the shortest suffix of the input matching the pattern.
    ///
    /// It is computationally more expensive than the other match methods,
    /// see [`CompiledMatcher::match_with_position`].
    pub fn match_shortest_suffix(&self, input: &str) -> Result<Option<usize>> {
        self.match_with_mode(input, SHORTEST_SUFFIX)
    }

    /// Returns the start of the longest suffix of the input matching the pattern.
    pub fn match_longest_suffix(&self, input: &str) -> Result<Option<usize>> {
        self.match_with_mode(input, LONGEST_SUFFIX)
    }
}

impl fmt::Debug for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Glob")
            .field("pattern", &self.pattern)
            .field("segments", &self.segments)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl FromStr for Glob {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Clone for Glob {
    fn clone(&self) -> Self {
        let compiled = self.compiled.lock().unwrap_or_else(PoisonError::into_inner).clone();
        Self {
            pattern: self.pattern.clone(),
            segments: self.segments.clone(),
            compiled: Mutex::new(compiled),
        }
    }
}
