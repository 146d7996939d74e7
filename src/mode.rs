// std imports
use std::fmt;

// third-party imports
use enumset::{EnumSet, EnumSetType, enum_set};
use serde::{Deserialize, de};
use strum::{Display, EnumIter, EnumString};

// local imports
use crate::error::{Error, Result};

// ---

/// A single independent matching flag.
///
/// Flags are combined into a [`MatchMode`].
#[derive(Debug, Hash, Ord, PartialOrd, EnumSetType, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum MatchFlag {
    /// The match must start at the beginning of the input.
    #[strum(to_string = "anchor-prefix", serialize = "prefix")]
    AnchorPrefix,
    /// The match must end at the end of the input.
    #[strum(to_string = "anchor-suffix", serialize = "suffix")]
    AnchorSuffix,
    /// Variable-length wildcards consume as few characters as possible.
    #[strum(to_string = "shortest-match", serialize = "shortest")]
    ShortestMatch,
    /// Variable-length wildcards consume as many characters as possible.
    #[strum(to_string = "longest-match", serialize = "longest")]
    LongestMatch,
}

/// A set of [`MatchFlag`] values selecting anchoring and greediness.
pub type MatchMode = EnumSet<MatchFlag>;

/// The whole input must match the pattern.
pub const MATCH_WHOLE_STRING: MatchMode = enum_set!(MatchFlag::AnchorPrefix | MatchFlag::AnchorSuffix);
/// The shortest prefix of the input matching the pattern.
pub const SHORTEST_PREFIX: MatchMode = enum_set!(MatchFlag::AnchorPrefix | MatchFlag::ShortestMatch);
/// The longest prefix of the input matching the pattern.
pub const LONGEST_PREFIX: MatchMode = enum_set!(MatchFlag::AnchorPrefix | MatchFlag::LongestMatch);
/// The shortest suffix of the input matching the pattern.
pub const SHORTEST_SUFFIX: MatchMode = enum_set!(MatchFlag::AnchorSuffix | MatchFlag::ShortestMatch);
/// The longest suffix of the input matching the pattern.
pub const LONGEST_SUFFIX: MatchMode = enum_set!(MatchFlag::AnchorSuffix | MatchFlag::LongestMatch);

const GREEDINESS: MatchMode = enum_set!(MatchFlag::ShortestMatch | MatchFlag::LongestMatch);

/// Returns only the greediness flags of the given mode.
pub fn greediness(mode: MatchMode) -> MatchMode {
    mode & GREEDINESS
}

// ---

/// The closed set of matching strategies a compiled matcher can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    WholeString,
    PrefixShortest,
    PrefixLongest,
    SuffixShortest,
    SuffixLongest,
}

impl Strategy {
    /// Selects the strategy for the given mode.
    ///
    /// Whole-string mode accepts any single greediness flag or none.
    /// Prefix and suffix modes require exactly one greediness flag.
    /// Any other combination is rejected.
    pub fn for_mode(mode: MatchMode) -> Result<Self> {
        if mode.is_superset(GREEDINESS) {
            return Err(Error::UnsupportedMode(mode));
        }

        let prefix = mode.contains(MatchFlag::AnchorPrefix);
        let suffix = mode.contains(MatchFlag::AnchorSuffix);
        let shortest = mode.contains(MatchFlag::ShortestMatch);
        let longest = mode.contains(MatchFlag::LongestMatch);

        match (prefix, suffix, shortest, longest) {
            (true, true, _, _) => Ok(Self::WholeString),
            (true, false, true, false) => Ok(Self::PrefixShortest),
            (true, false, false, true) => Ok(Self::PrefixLongest),
            (false, true, true, false) => Ok(Self::SuffixShortest),
            (false, true, false, true) => Ok(Self::SuffixLongest),
            _ => Err(Error::UnsupportedMode(mode)),
        }
    }
}

// ---

/// Parses a comma-separated list of flag names into a [`MatchMode`].
///
/// Accepts full names (`anchor-prefix`), short aliases (`prefix`, `suffix`, `shortest`, `longest`)
/// and `whole-string` for both anchors.
///
/// # Examples
///
/// ```
/// use shglob::{LONGEST_PREFIX, mode::parse_mode};
///
/// assert_eq!(parse_mode("prefix, longest").unwrap(), LONGEST_PREFIX);
/// assert!(parse_mode("sideways").is_err());
/// ```
pub fn parse_mode(value: &str) -> Result<MatchMode> {
    let mut mode = MatchMode::new();
    for item in value.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        mode |= parse_item(item)?;
    }
    Ok(mode)
}

fn parse_item(item: &str) -> Result<MatchMode> {
    if item.eq_ignore_ascii_case("whole-string") {
        return Ok(MATCH_WHOLE_STRING);
    }

    item.parse::<MatchFlag>()
        .map(EnumSet::only)
        .map_err(|_| Error::UnknownFlag(item.to_owned()))
}

/// Deserializes a [`MatchMode`] from either a list of flag names or a comma-separated string.
///
/// Intended for use with `#[serde(deserialize_with = "shglob::mode::deserialize")]`.
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<MatchMode, D::Error>
where
    D: de::Deserializer<'de>,
{
    deserializer.deserialize_any(MatchModeVisitor)
}

struct MatchModeVisitor;

impl<'de> de::Visitor<'de> for MatchModeVisitor {
    type Value = MatchMode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a list of match flags or a comma-separated list of match flags")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut mode = MatchMode::new();
        while let Some(item) = seq.next_element::<String>()? {
            mode |= parse_item(item.trim()).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(mode)
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_mode(value).map_err(E::custom)
    }
}
