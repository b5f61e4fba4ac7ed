//! Text segmentation into classified runs.
//!
//! Input is scanned left to right and split into maximal runs of one of
//! three disjoint character classes (word, whitespace, symbol). The token
//! counters in [`crate::tokens`] then label each run with a [`SegmentClass`].

use serde::Serialize;

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// Raw character class used to find run boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII letter, ASCII digit or underscore.
    Word,
    /// Space, tab, line feed, form feed or carriage return.
    Whitespace,
    /// Anything else, including every non-ASCII character.
    Symbol,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_ascii_alphanumeric() || c == '_' {
            Self::Word
        } else if c.is_ascii_whitespace() {
            Self::Whitespace
        } else {
            Self::Symbol
        }
    }
}

/// A maximal run of characters sharing one [`CharClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub text: &'a str,
    pub class: CharClass,
}

/// Iterator over the maximal runs of a string.
///
/// The yielded runs are contiguous and together cover the whole input.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    rest: &'a str,
    /// Symbol runs also swallow whitespace (Claude splitting).
    symbols_absorb_whitespace: bool,
}

impl Runs<'_> {
    fn continues(&self, class: CharClass, next: CharClass) -> bool {
        next == class
            || (self.symbols_absorb_whitespace
                && class == CharClass::Symbol
                && next == CharClass::Whitespace)
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let first = self.rest.chars().next()?;
        let class = CharClass::of(first);
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| !self.continues(class, CharClass::of(c)))
            .map_or(self.rest.len(), |(i, _)| i);
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Run { text, class })
    }
}

/// Split `text` into maximal same-class runs.
pub fn runs(text: &str) -> Runs<'_> {
    Runs {
        rest: text,
        symbols_absorb_whitespace: false,
    }
}

/// Split `text` the way Claude does.
///
/// A run starting with whitespace is a plain whitespace run, but a run
/// starting with a symbol extends over every following non-word character,
/// whitespace included. `", "` is one symbol run.
pub fn claude_runs(text: &str) -> Runs<'_> {
    Runs {
        rest: text,
        symbols_absorb_whitespace: true,
    }
}

// ---------------------------------------------------------------------------
// Segment classes
// ---------------------------------------------------------------------------

/// Classification of a segment, as reported in the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentClass {
    Whitespace,
    Punctuation,
    Word,
    Number,
    /// Run containing at least one character above U+007F.
    #[serde(rename = "unicode")]
    NonAscii,
    /// Whole input under the simple model.
    #[serde(rename = "simple")]
    Whole,
}

impl SegmentClass {
    pub fn label(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Punctuation => "punctuation",
            Self::Word => "word",
            Self::Number => "number",
            Self::NonAscii => "unicode",
            Self::Whole => "simple",
        }
    }
}
