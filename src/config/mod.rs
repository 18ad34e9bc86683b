// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[navigation]` - Screen transition playback
//!
//! # Examples
//!
//! ```no_run
//! use storefront::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! let dir = config::paths::get_app_config_dir().expect("no config dir");
//! config::save_to_path(&config, &dir.join("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Screen transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Whether screen changes are animated.
    #[serde(
        default = "default_animations_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub animations_enabled: Option<bool>,

    /// Length of one screen transition in milliseconds.
    #[serde(
        default = "default_transition_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_duration_ms: Option<u32>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            animations_enabled: default_animations_enabled(),
            transition_duration_ms: default_transition_duration_ms(),
        }
    }
}

impl NavigationConfig {
    /// Whether transitions should be played at all.
    #[must_use]
    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled.unwrap_or(DEFAULT_ANIMATIONS_ENABLED)
    }

    /// Transition length, clamped to the supported range.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        let millis = self
            .transition_duration_ms
            .unwrap_or(DEFAULT_TRANSITION_DURATION_MS)
            .clamp(MIN_TRANSITION_DURATION_MS, MAX_TRANSITION_DURATION_MS);
        Duration::from_millis(u64::from(millis))
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,
}

fn default_animations_enabled() -> Option<bool> {
    Some(DEFAULT_ANIMATIONS_ENABLED)
}

fn default_transition_duration_ms() -> Option<u32> {
    Some(DEFAULT_TRANSITION_DURATION_MS)
}

// =============================================================================
// Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            navigation: NavigationConfig {
                animations_enabled: Some(false),
                transition_duration_ms: Some(120),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.navigation, NavigationConfig::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_to_path_creates_missing_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);
        save_to_path(&Config::default(), &path).expect("save");
        assert!(path.exists());
    }

    #[test]
    fn transition_duration_is_clamped() {
        let navigation = NavigationConfig {
            animations_enabled: Some(true),
            transition_duration_ms: Some(60_000),
        };
        assert_eq!(
            navigation.transition_duration(),
            Duration::from_millis(u64::from(MAX_TRANSITION_DURATION_MS))
        );
    }

    #[test]
    fn defaults_enable_animations() {
        let config = Config::default();
        assert!(config.navigation.animations_enabled());
        assert_eq!(
            config.navigation.transition_duration(),
            Duration::from_millis(u64::from(DEFAULT_TRANSITION_DURATION_MS))
        );
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        let text = toml::to_string_pretty(&config).expect("serialize");
        assert!(text.contains("theme_mode = \"dark\""));
    }
}
