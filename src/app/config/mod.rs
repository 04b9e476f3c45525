// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language, theme mode and start screen
//! - `[server]` - Backend base URL and optional request timeout
//! - `[notifications]` - Toast auto-dismiss delay
//! - `[gallery]` - Image preview cache size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `CAMPAIGN_STUDIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use campaign_studio::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Point the client at another backend
//! config.server.base_url = Some("https://studio.example.com".to_string());
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::app::Screen;
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
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Screen shown at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_screen: Option<Screen>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            start_screen: None,
        }
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the campaign backend.
    #[serde(default = "default_server_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Whole-request timeout in seconds. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_server_url(),
            timeout_secs: None,
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Seconds before a notification dismisses itself.
    #[serde(
        default = "default_dismiss_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_secs: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            dismiss_secs: default_dismiss_secs(),
        }
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of decoded image previews kept in memory.
    #[serde(
        default = "default_image_cache_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_capacity: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_cache_capacity: default_image_cache_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Request timeout clamped to the supported range, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.server
            .timeout_secs
            .map(|secs| Duration::from_secs(secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)))
    }

    /// Notification auto-dismiss delay clamped to the supported range.
    #[must_use]
    pub fn notification_dismiss_delay(&self) -> Duration {
        let secs = self
            .notifications
            .dismiss_secs
            .unwrap_or(DEFAULT_NOTIFICATION_DISMISS_SECS)
            .clamp(MIN_NOTIFICATION_DISMISS_SECS, MAX_NOTIFICATION_DISMISS_SECS);
        Duration::from_secs(secs)
    }

    /// Image preview cache capacity clamped to the supported range.
    #[must_use]
    pub fn image_cache_capacity(&self) -> usize {
        self.gallery
            .image_cache_capacity
            .unwrap_or(DEFAULT_IMAGE_CACHE_CAPACITY)
            .clamp(MIN_IMAGE_CACHE_CAPACITY, MAX_IMAGE_CACHE_CAPACITY)
    }
}

/// Resolves the backend base URL.
///
/// Priority: CLI flag, `CAMPAIGN_STUDIO_SERVER`, config file, built-in default.
#[must_use]
pub fn resolve_server_url(cli_server: Option<String>, config: &Config) -> String {
    if let Some(url) = cli_server.filter(|url| !url.is_empty()) {
        return url;
    }
    if let Ok(url) = std::env::var(ENV_SERVER_URL) {
        if !url.is_empty() {
            return url;
        }
    }
    config
        .server
        .base_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_server_url() -> Option<String> {
    Some(DEFAULT_SERVER_URL.to_string())
}

fn default_dismiss_secs() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_DISMISS_SECS)
}

fn default_image_cache_capacity() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "config load failed, using defaults");
                    return (Config::default(), Some(err.i18n_key().to_string()));
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

// =============================================================================
// Save Functions
// =============================================================================

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

/// Writes a default `settings.toml` when none exists yet.
///
/// Returns `true` if a file was written.
pub fn write_defaults_if_missing() -> Result<bool> {
    match get_config_path_with_override(None) {
        Some(path) if !path.exists() => {
            save_to_path(&Config::default(), &path)?;
            tracing::info!(path = %path.display(), "wrote default settings");
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
