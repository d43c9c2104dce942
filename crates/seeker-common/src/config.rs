use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, ToolError};

/// Environment variable consulted for the search endpoint when no override is given.
pub const SEARCH_ENGINE_URL_VAR: &str = "SEARCH_ENGINE_URL";

/// Somewhere configuration values can be looked up by name.
pub trait ConfigSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Explicit construction input for the search-engine tool.
///
/// Anything set here wins over what the [`ConfigSource`] provides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEngineFields {
    #[serde(default)]
    pub search_engine_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl SearchEngineFields {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            search_engine_url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// Effective settings, resolved once when the tool is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngineConfig {
    /// Empty when nothing was configured; requests then fail at call time.
    pub base_url: String,
    pub timeout: Option<Duration>,
    /// Name of the variable the URL was looked up under, kept for error messages.
    pub env_var: String,
}

impl SearchEngineConfig {
    pub fn resolve(fields: &SearchEngineFields, source: &impl ConfigSource) -> Self {
        let base_url = fields
            .search_engine_url
            .clone()
            .or_else(|| source.var(SEARCH_ENGINE_URL_VAR))
            .unwrap_or_default();

        Self {
            base_url,
            timeout: fields.timeout_secs.map(Duration::from_secs),
            env_var: SEARCH_ENGINE_URL_VAR.to_string(),
        }
    }

    pub fn from_env(fields: &SearchEngineFields) -> Self {
        Self::resolve(fields, &ProcessEnv)
    }

    pub fn has_endpoint(&self) -> bool {
        !self.base_url.is_empty()
    }
}

/// On-disk configuration for the CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub search_engine: SearchEngineSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchEngineSection {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
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

fn default_log_level() -> String {
    "info".to_string()
}

impl SystemConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SystemConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.search_engine.url {
            if url.trim().is_empty() {
                return Err(ToolError::Config(
                    "search_engine.url must not be blank".to_string(),
                ));
            }
            let parsed = url::Url::parse(url).map_err(|err| {
                ToolError::Config(format!(
                    "search_engine.url is not a valid URL: {} ({})",
                    url, err
                ))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ToolError::Config(format!(
                    "search_engine.url must use http or https, got {}",
                    parsed.scheme()
                )));
            }
        }

        if self.search_engine.timeout_secs == Some(0) {
            return Err(ToolError::Config(
                "search_engine.timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Fields for the tool, with file values standing in as the override.
    pub fn search_engine_fields(&self) -> SearchEngineFields {
        SearchEngineFields {
            search_engine_url: self.search_engine.url.clone(),
            timeout_secs: self.search_engine.timeout_secs,
        }
    }
}
