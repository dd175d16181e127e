//! Host configuration loaded from TOML.
//!
//! Every section has defaults, so an empty file (or no file at all) yields
//! a working setup with every shipped adapter enabled.

use crate::error::{Result, SiftError};
use serde::{Deserialize, Serialize};
use sift_engines::engines::{self, bing_videos, BingVideosEngine};
use std::path::{Path, PathBuf};

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "sift=info,sift_engines=info";

/// Top-level host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    pub engines: EnginesConfig,
    pub logging: LoggingConfig,
}

/// Which adapters to register and how to configure them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnginesConfig {
    /// Names of the adapters to register.
    pub enabled: Vec<String>,
    pub bing_videos: BingVideosConfig,
}

impl Default for EnginesConfig {
    fn default() -> Self {
        Self {
            enabled: engines::KNOWN_ENGINES.iter().map(|n| n.to_string()).collect(),
            bing_videos: BingVideosConfig::default(),
        }
    }
}

/// Settings for the Bing Videos adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BingVideosConfig {
    /// Async content endpoint the query URLs are built on.
    pub base_url: String,
}

impl Default for BingVideosConfig {
    fn default() -> Self {
        Self {
            base_url: bing_videos::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SiftConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::Config`] if the text is not valid config TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SiftError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SiftError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `<config dir>/sift/config.toml`.
    pub fn default_config_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("sift").join("config.toml"),
            None => PathBuf::from("/tmp/sift-config/config.toml"),
        }
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - at least one engine is enabled
    /// - every enabled engine is known, and listed once
    /// - the Bing Videos base URL is an absolute `http`/`https` URL
    /// - the log filter is not empty
    pub fn validate(&self) -> Result<()> {
        if self.engines.enabled.is_empty() {
            return Err(SiftError::Config(
                "at least one engine must be enabled".into(),
            ));
        }
        for (i, name) in self.engines.enabled.iter().enumerate() {
            if !engines::is_known(name) {
                return Err(SiftError::Config(format!("unknown engine: {name}")));
            }
            if self.engines.enabled[..i].contains(name) {
                return Err(SiftError::Config(format!("engine listed twice: {name}")));
            }
        }
        BingVideosEngine::with_base_url(&self.engines.bing_videos.base_url)
            .map_err(|e| SiftError::Config(e.to_string()))?;
        if self.logging.filter.trim().is_empty() {
            return Err(SiftError::Config("logging.filter must not be empty".into()));
        }
        Ok(())
    }
}
