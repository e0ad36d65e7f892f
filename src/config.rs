//! # Configuration
//!
//! [`CatalogConfig`] is read from TOML. Every key is optional:
//!
//! ```toml
//! page_size = 10
//! live_filter_fields = ["quantity"]
//! submit_timeout_ms = 10000
//! submit_buffer = 32
//! ```

use crate::engine::DEFAULT_PAGE_SIZE;
use crate::model::{FilterField, FilterPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is outside its allowed range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub page_size: usize,
    /// Fields filtered by the draft pattern while the user types.
    pub live_filter_fields: Vec<FilterField>,
    pub submit_timeout_ms: u64,
    /// Channel depth of the submission actor.
    pub submit_buffer: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            live_filter_fields: vec![FilterField::Quantity],
            submit_timeout_ms: 10_000,
            submit_buffer: 32,
        }
    }
}

impl CatalogConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to the defaults when the file does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".to_string()));
        }
        if self.submit_buffer == 0 {
            return Err(ConfigError::Invalid(
                "submit_buffer must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn filter_policy(&self) -> FilterPolicy {
        FilterPolicy::with_live_fields(self.live_filter_fields.iter().copied())
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }
}
