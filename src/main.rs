use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tokencount::cli::{Cli, ColorMode};
use tokencount::commands;
use tokencount::commands::count::CountCommandOptions;

fn main() {
    let cli = Cli::parse();

    // Configure color output
    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }

    // Init tracing
    let filter = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let text = cli.joined_text();
    commands::count::run(CountCommandOptions {
        text,
        model: cli.model,
        file: cli.file,
        verbose: cli.verbose,
        json: cli.json,
        config_path: cli.config,
    })?;
    Ok(())
}
