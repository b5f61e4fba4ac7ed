use std::path::PathBuf;

use clap::{Parser, ValueEnum};

const AFTER_HELP: &str = "\
Examples:
  tokencount \"Hello, world!\"
  tokencount -m gpt-3.5 -v \"Detailed analysis\"
  echo \"Some text\" | tokencount -j
  tokencount -f document.txt -m claude

Available models:
  simple   - Basic estimation (4 chars = 1 token)
  gpt-3.5  - GPT-3.5 estimation
  gpt-4    - GPT-4 estimation (default)
  claude   - Claude estimation";

#[derive(Parser, Debug)]
#[command(
    name = "tokencount",
    about = "Estimate token count for AI models",
    version,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Text to estimate (joined with spaces); reads --file or stdin when absent
    pub text: Vec<String>,

    /// Model to use for estimation (simple, gpt-3.5, gpt-4, claude)
    #[arg(short, long, env = "TOKENCOUNT_MODEL")]
    pub model: Option<String>,

    /// Input file to read
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Verbose output with token breakdown
    #[arg(short, long)]
    pub verbose: bool,

    /// Output results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    /// Positional arguments joined into one string.
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
