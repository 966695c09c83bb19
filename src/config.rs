use crate::core::FeedPaths;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub feeds: FeedSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Where the published JSON feeds live
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_preset_questions_path")]
    pub preset_questions_path: String,
    #[serde(default = "default_predictions_path")]
    pub predictions_path: String,
    #[serde(default = "default_scores_path")]
    pub scores_path: String,
    pub timeout_secs: Option<u64>,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            preset_questions_path: default_preset_questions_path(),
            predictions_path: default_predictions_path(),
            scores_path: default_scores_path(),
            timeout_secs: None,
        }
    }
}

impl FeedSettings {
    pub fn paths(&self) -> FeedPaths {
        FeedPaths {
            preset_questions: self.preset_questions_path.clone(),
            predictions: self.predictions_path.clone(),
            scores: self.scores_path.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_base_url() -> String { "http://localhost:8000/".to_string() }
fn default_preset_questions_path() -> String { "./data/preset_questions.json".to_string() }
fn default_predictions_path() -> String { "./data/predictions.json".to_string() }
fn default_scores_path() -> String { "./data/scores.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MATCHDAY__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCHDAY__FEEDS__BASE_URL -> feeds.base_url
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("MATCHDAY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
