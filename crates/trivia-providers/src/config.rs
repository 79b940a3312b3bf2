//! Game configuration and source factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use trivia_core::traits::QuestionSource;

use crate::opentdb::{OpenTdbSource, DEFAULT_AMOUNT, DEFAULT_BASE_URL};

/// Environment variable that overrides `api_url`.
pub const API_URL_ENV: &str = "TRIVIA_API_URL";

/// Top-level trivia configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaConfig {
    /// Base URL of the Open Trivia Database API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Number of questions requested per game.
    #[serde(default = "default_amount")]
    pub amount: u32,
}

fn default_api_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_amount() -> u32 {
    DEFAULT_AMOUNT
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            amount: default_amount(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `trivia.toml` in the current directory
/// 2. `~/.config/trivia/config.toml`
///
/// `TRIVIA_API_URL` overrides the API URL from any file.
pub fn load_config_from(path: Option<&Path>) -> Result<TriviaConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("trivia.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config_file(&path)?,
        None => TriviaConfig::default(),
    };

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.is_empty() {
            config.api_url = url;
        }
    }

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<TriviaConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<TriviaConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("trivia"))
}

/// Create the question source described by the configuration.
pub fn create_source(config: &TriviaConfig) -> Box<dyn QuestionSource> {
    Box::new(OpenTdbSource::new(Some(config.api_url.clone())))
}
