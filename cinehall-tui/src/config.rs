//! Application configuration.
//!
//! Stored as JSON under the platform config directory
//! (`~/.config/cinehall-admin/config.json` on Linux). A missing file is
//! seeded with defaults on first start; the `CINEHALL_API_BASE` environment
//! variable overrides the configured backend URL either way.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinehall-admin")
}

fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// Color theme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    #[default]
    Dark,
    Light,
}

impl ThemeSetting {
    /// Theme index consumed by the view layer (0 = Dark, 1 = Light).
    pub fn index(self) -> u8 {
        match self {
            ThemeSetting::Dark => 0,
            ThemeSetting::Light => 1,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the Cinehall backend.
    pub api_base_url: String,
    /// Color theme.
    pub theme: ThemeSetting,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            theme: ThemeSetting::default(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration.
    ///
    /// A missing file is created with defaults so the operator has
    /// something to edit; a malformed file is an error rather than a
    /// silent fallback.
    pub fn load() -> Result<Self> {
        let path = config_file();

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("malformed config file {}", path.display()))?
        } else {
            let config = Self::default();
            if let Err(e) = config.save() {
                log::warn!("could not seed config file: {e}");
            }
            config
        };

        if let Ok(base) = std::env::var("CINEHALL_API_BASE") {
            if !base.is_empty() {
                config.api_base_url = base;
            }
        }

        Ok(config)
    }

    /// Writes the configuration to disk.
    pub fn save(&self) -> Result<()> {
        let dir = config_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let path = config_file();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.theme, ThemeSetting::Dark);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api_base_url": "http://backend:9000"}"#).unwrap();
        assert_eq!(config.api_base_url, "http://backend:9000");
        assert_eq!(config.theme, ThemeSetting::Dark);
    }

    #[test]
    fn theme_round_trips_lowercase() {
        let config = AppConfig {
            theme: ThemeSetting::Light,
            ..AppConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"light\""));
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme, ThemeSetting::Light);
        assert_eq!(back.theme.index(), 1);
    }
}
