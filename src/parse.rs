// std imports
use std::iter::Peekable;
use std::mem::take;
use std::str::Chars;

/// The kind of a parsed [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Literal text, already escaped for the expression syntax.
    Static,
    /// `?`, exactly one character.
    SingleWildcard,
    /// `*`, zero or more characters.
    MultiWildcard,
}

/// A single unit of a parsed glob pattern.
///
/// Consecutive literal characters are always coalesced into one [`SegmentKind::Static`] segment,
/// while every `?` and `*` of the source pattern produces a segment of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    fn wildcard(kind: SegmentKind) -> Self {
        let text = match kind {
            SegmentKind::SingleWildcard => "?",
            _ => "*",
        };
        Self {
            text: text.to_owned(),
            kind,
        }
    }
}

/// Splits a glob pattern into segments.
///
/// This function is infallible; all input strings are valid patterns.
/// A trailing backslash without a following character is treated as a literal backslash.
/// Character classes are passed through to the expression syntax as is, except that
/// a leading `!` is turned into `^`. Problems inside them are reported on compilation.
pub fn parse(pattern: &str) -> Vec<Segment> {
    Tokenizer::default().run(pattern)
}

// ---

#[derive(Default)]
struct Tokenizer {
    segments: Vec<Segment>,
    literal: String,
}

impl Tokenizer {
    fn run(mut self, pattern: &str) -> Vec<Segment> {
        let mut chars = pattern.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\\' => match chars.next() {
                    Some(escaped) => self.push_literal(escaped),
                    None => self.push_literal('\\'),
                },
                '?' => self.push_wildcard(SegmentKind::SingleWildcard),
                '*' => self.push_wildcard(SegmentKind::MultiWildcard),
                '[' => self.push_class(&mut chars),
                _ => self.push_literal(ch),
            }
        }

        self.flush();
        self.segments
    }

    fn flush(&mut self) {
        if !self.literal.is_empty() {
            self.segments.push(Segment {
                text: take(&mut self.literal),
                kind: SegmentKind::Static,
            });
        }
    }

    fn push_wildcard(&mut self, kind: SegmentKind) {
        self.flush();
        self.segments.push(Segment::wildcard(kind));
    }

    fn push_literal(&mut self, ch: char) {
        let mut buf = [0; 4];
        self.literal.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
    }

    fn push_class(&mut self, chars: &mut Peekable<Chars<'_>>) {
        self.literal.push('[');

        if chars.next_if(|&ch| ch == '!' || ch == '^').is_some() {
            self.literal.push('^');
        }

        // a closing bracket right after the opening one is a member of the class
        if chars.next_if_eq(&']').is_some() {
            self.literal.push(']');
        }

        let mut prev = None;
        while let Some(ch) = chars.next() {
            match ch {
                ']' => {
                    self.literal.push(']');
                    return;
                }
                '\\' => self.push_literal(chars.next().unwrap_or('\\')),
                // doubled `&`, `~` and `-` are set operators in the expression syntax
                '&' | '~' => {
                    self.literal.push('\\');
                    self.literal.push(ch);
                }
                '-' if prev == Some('-') || chars.peek() == Some(&'-') => self.literal.push_str(r"\-"),
                _ => self.literal.push(ch),
            }
            prev = Some(ch);
        }
    }
}
