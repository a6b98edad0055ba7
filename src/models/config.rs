//! Settings loaded from an optional YAML file and the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::DEFAULT_KEYWORDS;

/// Config file read when `VIBE_CONFIG` is not set. Missing files are skipped.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub candidates_path: PathBuf,
    pub keywords: String,
    pub api_base_url: String,
    /// Web host repository references must point at.
    pub repository_host: String,
    pub request_timeout_secs: u64,
    pub fetch_concurrency: usize,
    /// Decimal places kept when exporting scores.
    pub score_precision: u32,
    #[serde(default)]
    pub csv_output: Option<PathBuf>,
    #[serde(default)]
    pub json_output: Option<PathBuf>,
    #[serde(default)]
    pub github_token: Option<String>,
}

impl Settings {
    /// Loads settings from `VIBE_CONFIG` (or [`DEFAULT_CONFIG_PATH`]) and
    /// `VIBE_*` environment variables, in increasing priority.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var("VIBE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("candidates_path", "candidates.json")?
            .set_default("keywords", DEFAULT_KEYWORDS)?
            .set_default("api_base_url", "https://api.github.com")?
            .set_default("repository_host", "github.com")?
            .set_default("request_timeout_secs", 10)?
            .set_default("fetch_concurrency", 4)?
            .set_default("score_precision", 3)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("VIBE").try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings.with_token_fallback(env::var("GITHUB_TOKEN").ok()))
    }

    /// Uses `fallback` when no non-blank token is configured.
    fn with_token_fallback(mut self, fallback: Option<String>) -> Self {
        let non_blank = |t: &String| !t.trim().is_empty();
        self.github_token = self
            .github_token
            .filter(non_blank)
            .or_else(|| fallback.filter(non_blank));
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
