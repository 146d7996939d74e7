// local imports
use crate::mode::{MatchFlag, MatchMode};
use crate::parse::{Segment, SegmentKind};

/// Builds the search expression equivalent to the parsed pattern under the given mode.
///
/// Variable-length wildcards are lazy unless [`MatchFlag::LongestMatch`] is set.
/// A `*` that is the last segment of the pattern is always greedy, otherwise it
/// would never consume anything at the right edge of a prefix match.
///
/// Wildcards match any character, including line breaks.
pub fn translate(segments: &[Segment], mode: MatchMode) -> String {
    let mut expr = String::from("(?s)");

    if mode.contains(MatchFlag::AnchorPrefix) {
        expr.push('^');
    }

    let longest = mode.contains(MatchFlag::LongestMatch);
    let last = segments.len().saturating_sub(1);

    for (pos, segment) in segments.iter().enumerate() {
        match segment.kind {
            SegmentKind::SingleWildcard => expr.push('.'),
            SegmentKind::MultiWildcard => {
                if longest || pos == last {
                    expr.push_str(".*");
                } else {
                    expr.push_str(".*?");
                }
            }
            SegmentKind::Static => expr.push_str(&segment.text),
        }
    }

    if mode.contains(MatchFlag::AnchorSuffix) {
        expr.push('$');
    }

    expr
}
