use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::frame::Region;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub transition: TransitionConfig,
    pub replay: ReplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Parameters of a single transition measurement.
///
/// `region` and `mask` are mutually exclusive; that is checked when the
/// request is built, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
    #[serde(default = "default_stable_secs")]
    pub stable_secs: f64,
    #[serde(default)]
    pub region: Option<Region>,
    /// Black & white image: white pixels are analysed, black ones ignored.
    #[serde(default)]
    pub mask: Option<PathBuf>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            stable_secs: default_stable_secs(),
            region: None,
            mask: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayConfig {
    /// Directory of captured frames named `{captured_at_ms}.{ext}`.
    pub frames_dir: PathBuf,
    /// Key-press completion time. When unset only the end of the transition
    /// is measured, starting from the first recorded frame.
    #[serde(default)]
    pub press_at_ms: Option<i64>,
    #[serde(default = "default_action")]
    pub action: String,
    #[serde(default = "default_output")]
    pub output: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFile(path.display().to_string(), e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    ReadFile(String, std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(String),
}

// Default value functions
fn default_timeout_secs() -> f64 {
    10.0
}
fn default_stable_secs() -> f64 {
    1.0
}
fn default_action() -> String {
    "KEY_OK".into()
}
fn default_output() -> String {
    "text".into()
}
fn default_log_level() -> String {
    "info".into()
}
