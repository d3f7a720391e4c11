//! Configuration file loading
//!
//! The config file is optional. A missing file yields defaults; a present but
//! broken one is an error so typos don't silently fall back.
//!
//! ```toml
//! [generation]
//! model = "gemini-2.5-flash"
//! endpoint = "https://generativelanguage.googleapis.com/v1beta"
//! timeout_secs = 120
//! max_output_tokens = 8192
//! idea_count = 3
//!
//! [storage]
//! database = "/custom/path/planwright.db"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::constants;
use crate::paths;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationConfig,
    pub storage: StorageConfig,
}

/// Generation service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Gemini model id
    pub model: String,
    /// API base URL
    pub endpoint: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Output token cap per call
    pub max_output_tokens: usize,
    /// Number of candidate drafts requested per section
    pub idea_count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: constants::ai::DEFAULT_MODEL.to_string(),
            endpoint: constants::ai::DEFAULT_ENDPOINT.to_string(),
            timeout_secs: constants::http::REQUEST_TIMEOUT.as_secs(),
            max_output_tokens: constants::ai::MAX_OUTPUT_TOKENS,
            idea_count: constants::ai::DEFAULT_IDEA_COUNT,
        }
    }
}

impl GenerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Storage settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file; defaults to `<data dir>/planwright.db`
    pub database: Option<PathBuf>,
}

impl Config {
    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(&paths::config_file())
    }

    /// Load from `path` if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Load and validate a config file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolved database path
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database
            .clone()
            .unwrap_or_else(paths::database_path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let generation = &self.generation;

        if generation.model.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "generation.model must not be empty".to_string(),
            ));
        }

        if generation.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "generation.endpoint must not be empty".to_string(),
            ));
        }

        if generation.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "generation.timeout_secs must be > 0".to_string(),
            ));
        }

        if generation.max_output_tokens == 0 {
            return Err(ConfigError::Invalid(
                "generation.max_output_tokens must be > 0".to_string(),
            ));
        }

        if !(1..=constants::ai::MAX_IDEA_COUNT).contains(&generation.idea_count) {
            return Err(ConfigError::Invalid(format!(
                "generation.idea_count must be between 1 and {}",
                constants::ai::MAX_IDEA_COUNT
            )));
        }

        Ok(())
    }
}
