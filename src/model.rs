//! Model selectors and their metadata.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Model families the estimator knows rule sets for.
///
/// GPT-3.5 and GPT-4 share one rule set; they are kept apart only so the
/// report can name the model the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Model {
    /// Length-only heuristic (4 bytes = 1 token).
    Simple,
    /// GPT-3.5 Turbo.
    Gpt35,
    /// GPT-4 (the fallback for unknown names).
    #[default]
    Gpt4,
    /// Anthropic Claude.
    Claude,
}

impl Model {
    /// Every selectable model, in help-text order.
    pub const ALL: [Model; 4] = [Self::Simple, Self::Gpt35, Self::Gpt4, Self::Claude];

    /// Resolve a user-supplied model name.
    ///
    /// Matching is case-insensitive. Unrecognised names, including the empty
    /// string, silently resolve to [`Model::Gpt4`].
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "simple" => Self::Simple,
            "gpt-3.5" | "gpt3.5" | "gpt35" => Self::Gpt35,
            "gpt-4" | "gpt4" => Self::Gpt4,
            "claude" => Self::Claude,
            _ => Self::Gpt4,
        }
    }

    /// Canonical name used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Gpt35 => "gpt-3.5",
            Self::Gpt4 => "gpt-4",
            Self::Claude => "claude",
        }
    }

    /// Fixed human-readable description of the estimation rules.
    pub fn description(self) -> &'static str {
        match self {
            Self::Simple => "Simple estimation (4 characters = 1 token)",
            Self::Gpt35 => "GPT-3.5 estimation algorithm",
            Self::Gpt4 => "GPT-4 estimation algorithm",
            Self::Claude => "Claude estimation algorithm",
        }
    }
}

impl FromStr for Model {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
