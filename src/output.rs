//! Report rendering for estimation results.
//!
//! A [`Report`] is built once per run and rendered either as a human-readable
//! text block or as pretty-printed JSON. Rendering never changes the counts.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::error::{Result, TokenCountError};
use crate::tokens::TokenInfo;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Everything printed for one estimation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Echoed input, only in verbose text mode for short inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub token_count: usize,
    /// Canonical model name.
    pub model: String,
    pub model_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<TokenInfo>>,
}

/// Layout knobs for the text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    /// Segment column width; longer segment text is truncated.
    pub display_width: usize,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self { display_width: 20 }
    }
}

const RULE_WIDTH: usize = 50;

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Render a report in the given format.
pub fn format_report(report: &Report, format: Format, layout: TextLayout) -> Result<String> {
    match format {
        Format::Text => Ok(format_text(report, layout)),
        Format::Json => format_json(report),
    }
}

/// JSON: serialise the full report using serde.
fn format_json(report: &Report) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report).map_err(|e| {
        TokenCountError::config_with_source("failed to serialize report as JSON", e)
    })?;
    out.push('\n');
    Ok(out)
}

/// Text: totals first, then the breakdown table when details are present.
///
/// ```text
/// Tokens: 4
/// Model: gpt-4 (GPT-4 estimation algorithm)
///
/// Token breakdown:
/// --------------------------------------------------
/// Hello                word         1 token(s)
/// ```
fn format_text(report: &Report, layout: TextLayout) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "Tokens:".bold(), report.token_count));
    out.push_str(&format!(
        "{} {} ({})\n",
        "Model:".bold(),
        report.model,
        report.model_info
    ));

    let Some(details) = report.details.as_deref().filter(|d| !d.is_empty()) else {
        return out;
    };

    out.push('\n');
    out.push_str(&format!("{}\n", "Token breakdown:".bold()));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for detail in details {
        out.push_str(&format!(
            "{:<width$} {:<12} {} token(s)\n",
            truncate(&detail.text, layout.display_width),
            detail.class.label(),
            detail.tokens,
            width = layout.display_width,
        ));
    }

    if let Some(ref text) = report.text {
        out.push('\n');
        out.push_str(&format!("{}\n", "Original text:".bold()));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(text);
        out.push('\n');
    }

    out
}

/// Shorten `s` to at most `max_chars` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

// ---------------------------------------------------------------------------
// Output writing
// ---------------------------------------------------------------------------

/// Write rendered output to stdout.
pub fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| TokenCountError::io("writing to stdout", e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmentClass;

    fn sample_report() -> Report {
        Report {
            text: Some("Hello, world!".to_string()),
            token_count: 4,
            model: "gpt-4".to_string(),
            model_info: "GPT-4 estimation algorithm".to_string(),
            details: Some(vec![
                TokenInfo {
                    text: "Hello".to_string(),
                    tokens: 1,
                    class: SegmentClass::Word,
                },
                TokenInfo {
                    text: ",".to_string(),
                    tokens: 1,
                    class: SegmentClass::Punctuation,
                },
            ]),
        }
    }

    fn plain_text(report: &Report) -> String {
        colored::control::set_override(false);
        format_text(report, TextLayout::default())
    }

    #[test]
    fn text_has_totals() {
        let report = Report {
            text: None,
            details: None,
            ..sample_report()
        };
        let output = plain_text(&report);
        assert_eq!(
            output,
            "Tokens: 4\nModel: gpt-4 (GPT-4 estimation algorithm)\n"
        );
    }

    #[test]
    fn text_has_breakdown_rows() {
        let output = plain_text(&sample_report());
        assert!(output.contains("Token breakdown:"));
        assert!(output.contains(&"-".repeat(50)));
        assert!(output.contains(&format!("{:<20} {:<12} 1 token(s)", "Hello", "word")));
        assert!(output.contains(&format!("{:<20} {:<12} 1 token(s)", ",", "punctuation")));
        assert!(output.contains("Original text:\n"));
        assert!(output.ends_with("Hello, world!\n"));
    }

    #[test]
    fn text_skips_breakdown_when_empty() {
        let report = Report {
            details: Some(Vec::new()),
            ..sample_report()
        };
        let output = plain_text(&report);
        assert!(!output.contains("Token breakdown:"));
        assert!(!output.contains("Original text:"));
    }

    #[test]
    fn json_omits_absent_fields() {
        let report = Report {
            text: None,
            details: None,
            ..sample_report()
        };
        let output = format_json(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["token_count"], 4);
        assert_eq!(parsed["model"], "gpt-4");
        assert_eq!(parsed["model_info"], "GPT-4 estimation algorithm");
        assert!(parsed.get("text").is_none());
        assert!(parsed.get("details").is_none());
    }

    #[test]
    fn json_includes_details() {
        let output = format_json(&sample_report()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let details = parsed["details"].as_array().unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[1]["type"], "punctuation");
    }

    #[test]
    fn truncate_short_strings_untouched() {
        assert_eq!(truncate("hello", 20), "hello");
        assert_eq!(truncate(&"a".repeat(20), 20), "a".repeat(20));
    }

    #[test]
    fn truncate_long_strings() {
        let cut = truncate(&"a".repeat(25), 20);
        assert_eq!(cut, format!("{}...", "a".repeat(17)));
        assert_eq!(cut.chars().count(), 20);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let cut = truncate(&"世".repeat(10), 5);
        assert_eq!(cut, "世世...");
    }
}
