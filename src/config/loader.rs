use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/smartvas/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config directory is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("smartvas").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`; an unreadable or invalid
    /// file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.backend.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "backend.base_url must not be empty".to_string(),
            });
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                message: format!("backend.base_url '{}' must be an http(s) origin", base_url),
            });
        }
        if self.defaults.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "defaults.timeout_seconds must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
