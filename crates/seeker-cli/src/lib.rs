//! Shared CLI utilities and types

pub mod completions;
pub mod display;
pub mod interactive;
pub mod oneshot;

use anyhow::Context;
use seeker_common::{SearchEngineFields, SystemConfig};
use std::path::Path;

/// Settings after layering command-line flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub fields: SearchEngineFields,
    pub log_level: String,
}

impl Settings {
    /// Flags win over the file; the file wins over `SEARCH_ENGINE_URL`.
    pub fn load(
        config_path: Option<&Path>,
        url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => SystemConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => SystemConfig::default(),
        };

        let mut fields = config.search_engine_fields();
        if url.is_some() {
            fields.search_engine_url = url;
        }
        if timeout_secs.is_some() {
            fields.timeout_secs = timeout_secs;
        }

        Ok(Self {
            fields,
            log_level: config.logging.level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seeker.toml");
        fs::write(
            &path,
            "[search_engine]\nurl = \"http://file.example\"\ntimeout_secs = 3\n",
        )
        .unwrap();

        let settings =
            Settings::load(Some(&path), Some("http://flag.example".to_string()), None).unwrap();
        assert_eq!(
            settings.fields.search_engine_url.as_deref(),
            Some("http://flag.example")
        );
        assert_eq!(settings.fields.timeout_secs, Some(3));
    }

    #[test]
    fn test_no_file_no_flags() {
        let settings = Settings::load(None, None, None).unwrap();
        assert_eq!(settings.fields, SearchEngineFields::default());
        assert_eq!(settings.log_level, "info");
    }
}
