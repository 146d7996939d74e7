// third-party imports
use regex::Regex;

// local imports
use crate::error::{Error, Result};
use crate::mode::{MatchMode, Strategy};
use crate::parse::{Segment, parse};
use crate::translate::translate;

/// A glob pattern compiled for a single [`MatchMode`].
///
/// Compiled matchers are immutable and can be shared between threads.
///
/// Positions returned by the matcher are byte offsets into the input and always
/// lie on a character boundary:
/// - for prefix modes, the length of the matched prefix,
/// - for suffix modes, the start of the matched suffix (can be equal to the input length),
/// - for whole-string mode, the length of the input.
///
/// # Examples
///
/// ```
/// use shglob::{CompiledMatcher, SHORTEST_PREFIX};
///
/// let matcher = CompiledMatcher::compile("0*5", SHORTEST_PREFIX).unwrap();
/// assert_eq!(matcher.match_with_position("0123456789"), Some(6));
/// assert_eq!(matcher.match_with_position("123"), None);
/// ```
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    regex: Regex,
    strategy: Strategy,
    mode: MatchMode,
}

impl CompiledMatcher {
    /// Compiles the pattern for the given mode.
    ///
    /// Fails with [`Error::UnsupportedMode`] if there is no matching strategy for the mode
    /// and with [`Error::InvalidExpression`] if the pattern cannot be compiled,
    /// e.g. because of an unterminated character class.
    pub fn compile(pattern: &str, mode: MatchMode) -> Result<Self> {
        Self::from_segments(pattern, &parse(pattern), mode)
    }

    pub(crate) fn from_segments(pattern: &str, segments: &[Segment], mode: MatchMode) -> Result<Self> {
        let strategy = Strategy::for_mode(mode)?;
        let expr = translate(segments, mode);
        let regex = Regex::new(&expr).map_err(|source| Error::InvalidExpression {
            pattern: pattern.to_owned(),
            source,
        })?;

        log::debug!("compiled glob {pattern:?} for {mode:?} as {expr:?} using {strategy:?}");

        Ok(Self { regex, strategy, mode })
    }

    /// Returns the mode the matcher was compiled for.
    #[inline]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns the strategy selected for the mode.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the search expression the pattern was translated into.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Tests whether the input matches under the compiled mode.
    ///
    /// This is a whole-string check only for a matcher compiled with [`MATCH_WHOLE_STRING`].
    /// A prefix matcher accepts any input that starts with a match and a suffix matcher
    /// any input that ends with one. Use [`Glob::is_match`](crate::Glob::is_match) or
    /// [`matches`](crate::matches) for a whole-string check regardless of mode.
    ///
    /// [`MATCH_WHOLE_STRING`]: crate::MATCH_WHOLE_STRING
    #[inline]
    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Returns the match position, or `None` if the input does not match.
    ///
    /// Shortest-suffix matching rescans the input once per character after the first
    /// candidate, so it costs up to O(n²) on an input of n characters. Callers needing
    /// bounded latency should limit the input length.
    pub fn match_with_position(&self, input: &str) -> Option<usize> {
        let found = self.regex.find(input)?;

        match self.strategy {
            Strategy::WholeString => Some(input.len()),
            Strategy::PrefixShortest | Strategy::PrefixLongest => Some(found.end()),
            Strategy::SuffixLongest => Some(found.start()),
            Strategy::SuffixShortest => Some(self.shortest_suffix(input, found.start())),
        }
    }

    // The leftmost match of a suffix-anchored expression is the longest suffix.
    // Walk the start position to the right one character at a time until the
    // expression no longer matches, the last successful start is the shortest suffix.
    fn shortest_suffix(&self, input: &str, mut start: usize) -> usize {
        while let Some(ch) = input[start..].chars().next() {
            match self.regex.find_at(input, start + ch.len_utf8()) {
                Some(found) => {
                    log::trace!("shorter suffix candidate at {} for {:?}", found.start(), self.as_str());
                    start = found.start();
                }
                None => break,
            }
        }
        start
    }
}
