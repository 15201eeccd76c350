//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the series database file.
    pub database: PathBuf,
    /// Noise words stripped from filenames before template inference.
    pub ignore_words: Vec<String>,
    /// Digits in a substituted episode number.
    pub pad_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: dirs_data_path().join("series.csv"),
            ignore_words: vec!["END".to_string()],
            pad_width: 2,
        }
    }
}

impl Config {
    /// Build the parser configuration for this config.
    pub fn parser_config(&self) -> crate::core::parser::ParserConfig {
        crate::core::parser::ParserConfig {
            ignore_words: self.ignore_words.clone(),
            pad_width: self.pad_width,
            ..Default::default()
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("episode_tracker")
}

/// Get the data directory path.
fn dirs_data_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("episode_tracker")
}

/// Load configuration from file.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
    }

    Config::default()
}
