// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of the portal's `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[slider]` - Autoplay interval
//!
//! The theme preference is not part of this file: it lives in the
//! key/value preference cell (see [`crate::preferences`]).
//!
//! # Examples
//!
//! ```no_run
//! use news_portal::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.general.language = Some("bn-BD".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use crate::ui::state::SlideInterval;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "bn-BD").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Featured slider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    /// Autoplay interval in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            interval_ms: Some(DEFAULT_SLIDE_INTERVAL_MS),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub slider: SliderConfig,
}

impl Config {
    /// Autoplay interval, clamped to the supported range.
    #[must_use]
    pub fn slide_interval(&self) -> SlideInterval {
        self.slider
            .interval_ms
            .map(SlideInterval::new)
            .unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the settings file, falling back to defaults when it does not exist.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a settings file. Unparseable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let config = Config {
            general: GeneralConfig {
                language: Some("bn-BD".to_string()),
            },
            slider: SliderConfig {
                interval_ms: Some(8000),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.general.language.is_none());
        assert_eq!(loaded.slider.interval_ms, Some(DEFAULT_SLIDE_INTERVAL_MS));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let loaded: Config = toml::from_str("[general]\nlanguage = \"en-US\"\n").unwrap();
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.slider, SliderConfig::default());
    }

    #[test]
    fn slide_interval_is_clamped() {
        let mut config = Config::default();
        config.slider.interval_ms = Some(10);
        assert_eq!(config.slide_interval().millis(), MIN_SLIDE_INTERVAL_MS);

        config.slider.interval_ms = None;
        assert_eq!(config.slide_interval().millis(), DEFAULT_SLIDE_INTERVAL_MS);
    }
}
