use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_DELAY_MS, DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT, LISTING_URL,
    SITE_ORIGIN,
};
use crate::error::{Result, ScraperError};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listing_url: String,
    pub site_origin: String,
    pub user_agent: String,
    /// Pause after every detail fetch
    pub delay_ms: u64,
    /// Unset means requests may block indefinitely
    pub timeout_seconds: Option<u64>,
    pub output_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            site_origin: SITE_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            delay_ms: DEFAULT_DELAY_MS,
            timeout_seconds: None,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Loads an explicit config file, or `runway_scraper.toml` when it exists,
    /// or falls back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
