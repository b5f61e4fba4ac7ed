use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenCountError};
use crate::model::Model;

/// File name searched for in the working directory and config dir.
pub const CONFIG_FILE_NAME: &str = "tokencount.toml";

/// Top-level configuration for tokencount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default model name, resolved leniently like `--model`.
    pub model: String,
    /// Show the token breakdown by default.
    pub verbose: bool,
    /// Emit JSON by default.
    pub json: bool,
    /// Width of the segment column in the text breakdown.
    pub display_width: usize,
    /// Inputs longer than this many bytes are not echoed back.
    pub echo_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: Model::Gpt4.as_str().to_string(),
            verbose: false,
            json: false,
            display_width: 20,
            echo_limit: 1000,
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TokenCountError::io(format!("reading config from '{}'", path.display()), e)
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| TokenCountError::config_with_source("failed to parse config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<()> {
        // Truncation keeps `width - 3` characters plus "...".
        if self.display_width < 4 {
            return Err(TokenCountError::validation(
                "display_width",
                "must be at least 4",
            ));
        }
        Ok(())
    }

    /// Resolved default model.
    pub fn model(&self) -> Model {
        Model::parse(&self.model)
    }
}

/// Discover the config file using standard search order:
/// 1. Explicit path (if provided)
/// 2. ./tokencount.toml
/// 3. ~/.tokencount.toml
/// 4. XDG config dir
pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        if p.exists() {
            return Some(p.to_path_buf());
        }
        return None;
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    if let Some(home) = dirs_home() {
        let home_config = home.join(format!(".{CONFIG_FILE_NAME}"));
        if home_config.exists() {
            return Some(home_config);
        }
    }

    if let Some(proj_dirs) = ProjectDirs::from("", "", "tokencount") {
        let xdg = proj_dirs.config_dir().join(CONFIG_FILE_NAME);
        if xdg.exists() {
            return Some(xdg);
        }
    }

    None
}

/// Load the effective config.
///
/// An explicit path must exist; without one, a missing file means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match find_config_file(explicit) {
        Some(p) => {
            tracing::debug!(path = %p.display(), "loading config");
            Config::load(&p)
        }
        None => match explicit {
            Some(p) => Err(TokenCountError::config(format!(
                "config file '{}' does not exist",
                p.display()
            ))),
            None => Ok(Config::default()),
        },
    }
}

fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}
