// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Fallback language and log level
//! - `[navigation]` - Active-section tracking and smooth scrolling
//! - `[window]` - Initial window size
//!
//! The visitor's chosen language is *not* stored here: it lives in durable
//! client storage (see [`crate::storage`]) so that settings stay
//! user-editable while the selection behaves like browser storage.
//!
//! # Examples
//!
//! ```no_run
//! use cosmic_folio::config;
//! use cosmic_folio::locale::Language;
//!
//! let (mut config, _warning) = config::load();
//! config.general.default_language = Language::En;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::locale::Language;
use crate::navigation::{ActivationRule, TrackerSettings};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Language shown when nothing was persisted and the system language is
    /// unsupported.
    #[serde(default)]
    pub default_language: Language,

    /// Tracing filter directive (e.g. "info", "cosmic_folio=debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            log_level: default_log_level(),
        }
    }
}

/// Section tracking and scrolling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    #[serde(default = "default_bottom_tolerance")]
    pub bottom_tolerance_px: f32,

    /// Smooth scroll duration in milliseconds; `0` jumps immediately.
    #[serde(default = "default_scroll_duration")]
    pub scroll_duration_ms: u64,

    /// Rule deciding which visible section is active.
    #[serde(default)]
    pub activation: ActivationRule,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            bottom_tolerance_px: DEFAULT_BOTTOM_TOLERANCE_PX,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            activation: ActivationRule::default(),
        }
    }
}

impl NavigationConfig {
    /// Bottom tolerance clamped to the supported range.
    #[must_use]
    pub fn bottom_tolerance(&self) -> f32 {
        if self.bottom_tolerance_px.is_finite() {
            self.bottom_tolerance_px
                .clamp(MIN_BOTTOM_TOLERANCE_PX, MAX_BOTTOM_TOLERANCE_PX)
        } else {
            DEFAULT_BOTTOM_TOLERANCE_PX
        }
    }

    /// Scroll duration clamped to the supported range.
    #[must_use]
    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms.min(MAX_SCROLL_DURATION_MS))
    }

    #[must_use]
    pub fn tracker_settings(&self) -> TrackerSettings {
        TrackerSettings {
            bottom_tolerance: self.bottom_tolerance(),
            rule: self.activation,
        }
    }
}

/// Window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Window size, never below the minimum.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (
            self.width.max(MIN_WINDOW_WIDTH),
            self.height.max(MIN_WINDOW_HEIGHT),
        )
    }
}

// =============================================================================
// Root Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_bottom_tolerance() -> f32 {
    DEFAULT_BOTTOM_TOLERANCE_PX
}

fn default_scroll_duration() -> u64 {
    DEFAULT_SCROLL_DURATION_MS
}

fn default_window_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with the i18n key of a warning to display.
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
                    tracing::warn!(path = %path.display(), "Failed to load settings: {err}");
                    return (
                        Config::default(),
                        Some("warning-config-load".to_string()),
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
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
                default_language: Language::Es,
                log_level: "debug".to_string(),
            },
            navigation: NavigationConfig {
                bottom_tolerance_px: 12.0,
                scroll_duration_ms: 0,
                activation: ActivationRule::ViewportTop,
            },
            window: WindowConfig {
                width: 900,
                height: 700,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ndefault_language = \"en\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.general.default_language, Language::En);
        assert_eq!(loaded.general.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(loaded.navigation, NavigationConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn unsupported_default_language_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ndefault_language = \"fr\"\n")
            .expect("failed to write config");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "[navigation\n").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("warning-config-load"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(base_dir.clone()))
            .expect("save should create directories");
        assert!(base_dir.join("settings.toml").exists());
    }

    #[test]
    fn navigation_values_are_clamped() {
        let nav = NavigationConfig {
            bottom_tolerance_px: 500.0,
            scroll_duration_ms: 60_000,
            activation: ActivationRule::MostVisible,
        };
        assert_eq!(nav.bottom_tolerance(), MAX_BOTTOM_TOLERANCE_PX);
        assert_eq!(
            nav.scroll_duration(),
            Duration::from_millis(MAX_SCROLL_DURATION_MS)
        );

        let nan = NavigationConfig {
            bottom_tolerance_px: f32::NAN,
            ..NavigationConfig::default()
        };
        assert_eq!(nan.bottom_tolerance(), DEFAULT_BOTTOM_TOLERANCE_PX);
    }

    #[test]
    fn activation_rule_reads_kebab_case() {
        let config: Config = toml::from_str("[navigation]\nactivation = \"viewport-top\"\n")
            .expect("valid navigation table");
        assert_eq!(config.navigation.activation, ActivationRule::ViewportTop);
        assert_eq!(
            config.navigation.tracker_settings().bottom_tolerance,
            DEFAULT_BOTTOM_TOLERANCE_PX
        );
    }

    #[test]
    fn window_size_respects_minimum() {
        let window = WindowConfig {
            width: 10,
            height: 10,
        };
        assert_eq!(window.size(), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }
}
