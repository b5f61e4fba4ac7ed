//! Token estimation.
//!
//! Every estimate is a pure function of `(text, model)`: the text is cut into
//! classified segments (see [`crate::segment`]) and each segment contributes a
//! token count according to its model family's formula. The simple model
//! skips segmentation and divides the byte length by four.

use serde::Serialize;

use crate::model::Model;
use crate::segment::{self, CharClass, Run, SegmentClass};

// ---------------------------------------------------------------------------
// Trait (extensibility point)
// ---------------------------------------------------------------------------

/// Estimates token counts for a given text.
///
/// All implementations must be thread-safe.
pub trait TokenEstimator: Send + Sync {
    /// Estimate the number of tokens in `text`.
    fn estimate(&self, text: &str) -> usize;

    /// Canonical name of the model this estimator targets.
    fn model_name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Segments and detail records
// ---------------------------------------------------------------------------

/// A classified slice of the input and the tokens it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub class: SegmentClass,
    pub tokens: usize,
}

/// One line of the verbose breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenInfo {
    pub text: String,
    pub tokens: usize,
    #[serde(rename = "type")]
    pub class: SegmentClass,
}

impl From<Segment<'_>> for TokenInfo {
    fn from(segment: Segment<'_>) -> Self {
        Self {
            text: segment.text.to_string(),
            tokens: segment.tokens,
            class: segment.class,
        }
    }
}

// ---------------------------------------------------------------------------
// Estimator
// ---------------------------------------------------------------------------

/// Heuristic estimator for one model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Estimator {
    model: Model,
}

impl Estimator {
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    /// Build an estimator from a user-supplied model name.
    pub fn for_model(name: &str) -> Self {
        Self::new(Model::parse(name))
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn description(&self) -> &'static str {
        self.model.description()
    }

    /// Partition `text` into segments, each carrying its token contribution.
    ///
    /// Segments are in input order and concatenate back to `text`. The simple
    /// model yields a single segment for non-empty input.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        if text.is_empty() {
            return Vec::new();
        }
        match self.model {
            Model::Simple => vec![Segment {
                text,
                class: SegmentClass::Whole,
                tokens: simple_tokens(text),
            }],
            Model::Gpt35 | Model::Gpt4 => segment::runs(text).map(gpt_segment).collect(),
            Model::Claude => segment::claude_runs(text).map(claude_segment).collect(),
        }
    }

    /// Breakdown of every segment that costs at least one token.
    pub fn estimate_verbose(&self, text: &str) -> Vec<TokenInfo> {
        self.segments(text)
            .into_iter()
            .filter(|s| s.tokens > 0)
            .map(TokenInfo::from)
            .collect()
    }
}

impl TokenEstimator for Estimator {
    fn estimate(&self, text: &str) -> usize {
        if self.model == Model::Simple {
            return simple_tokens(text);
        }
        self.segments(text).iter().map(|s| s.tokens).sum()
    }

    fn model_name(&self) -> &str {
        self.model.as_str()
    }
}

// ---------------------------------------------------------------------------
// Per-class formulas
// ---------------------------------------------------------------------------

/// Four bytes per token, rounded up.
fn simple_tokens(text: &str) -> usize {
    text.len().div_ceil(4)
}

/// GPT-family rules.
///
/// A run is judged wholesale: a symbol run mixing ASCII punctuation with
/// non-ASCII characters is `NonAscii` and is not split further.
fn gpt_segment(run: Run<'_>) -> Segment<'_> {
    let text = run.text;
    let len = text.len();
    let (class, tokens) = match run.class {
        CharClass::Whitespace => (SegmentClass::Whitespace, 0),
        _ if !text.is_ascii() => (SegmentClass::NonAscii, text.chars().count()),
        CharClass::Symbol => (SegmentClass::Punctuation, 1),
        CharClass::Word if text.bytes().all(|b| b.is_ascii_digit()) => {
            let tokens = if len <= 3 { 1 } else { len.div_ceil(3) };
            (SegmentClass::Number, tokens)
        }
        CharClass::Word => {
            let tokens = if len <= 5 {
                1
            } else if len <= 10 {
                len.div_ceil(5)
            } else {
                len.div_ceil(4)
            };
            (SegmentClass::Word, tokens)
        }
    };
    Segment {
        text,
        class,
        tokens,
    }
}

/// Claude rules. Digits count as words and non-ASCII text as symbols.
fn claude_segment(run: Run<'_>) -> Segment<'_> {
    let text = run.text;
    let len = text.len();
    let (class, tokens) = match run.class {
        // Whitespace runs are ASCII, so byte length is character count.
        CharClass::Whitespace => (SegmentClass::Whitespace, usize::from(len > 1)),
        // Every character counts, including absorbed whitespace.
        CharClass::Symbol => (SegmentClass::Punctuation, text.chars().count()),
        CharClass::Word if len <= 5 => (SegmentClass::Word, 1),
        CharClass::Word => (SegmentClass::Word, len.div_ceil(5)),
    };
    Segment {
        text,
        class,
        tokens,
    }
}

// ---------------------------------------------------------------------------
// Convenience functions
// ---------------------------------------------------------------------------

/// Estimate the token count of `text` under `model`.
pub fn estimate_tokens(text: &str, model: Model) -> usize {
    Estimator::new(model).estimate(text)
}

/// Per-segment breakdown of `text` under `model`.
pub fn estimate_verbose(text: &str, model: Model) -> Vec<TokenInfo> {
    Estimator::new(model).estimate_verbose(text)
}

/// Fixed description of `model`'s estimation rules.
pub fn describe_model(model: Model) -> &'static str {
    model.description()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
