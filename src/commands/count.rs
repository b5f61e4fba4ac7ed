//! Handler for the default `tokencount` invocation.
//!
//! Resolves the model and input, runs the estimator and prints a report.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{self, Config};
use crate::error::Result;
use crate::input::InputSource;
use crate::model::Model;
use crate::output::{self, Format, Report, TextLayout};
use crate::tokens::{Estimator, TokenEstimator};

// ---------------------------------------------------------------------------
// Public interface
// ---------------------------------------------------------------------------

/// All inputs needed to run a count.
#[derive(Debug, Default)]
pub struct CountCommandOptions {
    /// Positional text, already joined with spaces.
    pub text: String,
    /// Model name from the command line.
    pub model: Option<String>,
    /// Input file, used when `text` is empty.
    pub file: Option<PathBuf>,
    /// Include the token breakdown.
    pub verbose: bool,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Path to config file.
    pub config_path: Option<PathBuf>,
}

/// Run the count command end-to-end and print the report.
pub fn run(options: CountCommandOptions) -> Result<()> {
    let config = config::load_config(options.config_path.as_deref())?;
    let rendered = render(&options, &config)?;
    output::write_stdout(&rendered)
}

/// Build and render the report without printing it.
pub fn render(options: &CountCommandOptions, config: &Config) -> Result<String> {
    let model = options
        .model
        .as_deref()
        .map_or_else(|| config.model(), Model::parse);
    let verbose = options.verbose || config.verbose;
    let format = if options.json || config.json {
        Format::Json
    } else {
        Format::Text
    };
    debug!(%model, verbose, ?format, "resolved options");

    let source = InputSource::resolve(&options.text, options.file.as_deref());
    info!(source = %source.describe(), "reading input");
    let input = source.read()?;

    let report = build_report(&input, model, verbose, format, config.echo_limit);
    info!(tokens = report.token_count, "estimated");

    let layout = TextLayout {
        display_width: config.display_width,
    };
    output::format_report(&report, format, layout)
}

/// Estimate `input` and assemble the report fields.
pub fn build_report(
    input: &str,
    model: Model,
    verbose: bool,
    format: Format,
    echo_limit: usize,
) -> Report {
    let estimator = Estimator::new(model);
    let details = verbose.then(|| estimator.estimate_verbose(input));
    let text = (verbose && format == Format::Text && input.len() <= echo_limit)
        .then(|| input.to_string());

    Report {
        text,
        token_count: estimator.estimate(input),
        model: estimator.model_name().to_string(),
        model_info: estimator.description().to_string(),
        details,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
