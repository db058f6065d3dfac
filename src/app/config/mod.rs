// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[api]` - Storefront API base URL, endpoints and request timeout
//! - `[gallery]` - Decoded image cache size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `CEDRIC_PLANS_CONFIG_DIR` environment
//!    variable (see [`paths`](crate::app::paths))
//! 3. Falls back to platform-specific config directory
//!
//! Endpoint values can additionally be overridden at startup through the
//! `CEDRIC_PLANS_API_*` environment variables, see [`Config::apply_env`].
//!
//! # Examples
//!
//! ```no_run
//! use cedric_plans::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.api.base_url = Some("https://api.example.com".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::settings::{ImageCacheCapacity, RequestTimeout};
use crate::error::{Error, Result};
use crate::infrastructure::http::ApiEndpoints;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Storefront API settings.
///
/// Endpoints may be absolute URLs or paths relative to `base_url`. With no
/// base URL, relative endpoints stay unconfigured and the app runs on the
/// embedded catalog alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Plan listing endpoint.
    #[serde(default = "default_plans")]
    pub plans: String,

    /// Plan detail endpoint template with an `:id` placeholder.
    #[serde(default = "default_plan_detail")]
    pub plan_detail: String,

    #[serde(default = "default_quotes")]
    pub quotes: String,

    /// Base for server-relative image paths. Defaults to the API origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_base_url: Option<String>,

    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            plans: default_plans(),
            plan_detail: default_plan_detail(),
            quotes: default_quotes(),
            media_base_url: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Resolved endpoint URLs for the HTTP adapters.
    #[must_use]
    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(
            self.base_url.as_deref(),
            Some(&self.plan_detail),
            Some(&self.quotes),
            self.media_base_url.as_deref(),
        )
    }

    /// Request timeout, clamped to the valid range.
    #[must_use]
    pub fn request_timeout(&self) -> RequestTimeout {
        self.request_timeout_secs
            .map(RequestTimeout::from_secs)
            .unwrap_or_default()
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of decoded images kept in memory.
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

impl GalleryConfig {
    #[must_use]
    pub fn cache_capacity(&self) -> ImageCacheCapacity {
        self.image_cache_capacity
            .map(ImageCacheCapacity::new)
            .unwrap_or_default()
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
    pub api: ApiConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Applies the `CEDRIC_PLANS_*` endpoint environment variables.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies endpoint overrides from `lookup`. Blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base) = value(ENV_API_BASE_URL) {
            self.api.base_url = Some(base);
        }
        if let Some(detail) = value(ENV_API_PLAN_DETAIL) {
            self.api.plan_detail = detail;
        }
        if let Some(quotes) = value(ENV_API_QUOTES) {
            self.api.quotes = quotes;
        }
        if let Some(media) = value(ENV_MEDIA_BASE_URL) {
            self.api.media_base_url = Some(media);
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_plans() -> String {
    DEFAULT_PLANS_ENDPOINT.to_string()
}

fn default_plan_detail() -> String {
    DEFAULT_PLAN_DETAIL_ENDPOINT.to_string()
}

fn default_quotes() -> String {
    DEFAULT_QUOTES_ENDPOINT.to_string()
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings not loaded");
                    return (
                        Config::default(),
                        Some(format!(
                            "Settings could not be read, defaults are in use ({err})"
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: Some("https://api.example.com".into()),
                media_base_url: Some("https://cdn.example.com".into()),
                request_timeout_secs: Some(30),
                ..ApiConfig::default()
            },
            gallery: GalleryConfig {
                image_cache_capacity: Some(16),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[api\nbase_url = ").expect("failed to write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn invalid_file_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[general]\ntheme_mode = \"sepia\"\n",
        )
        .expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_yields_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let config: Config = toml::from_str("[api]\nbase_url = \"https://x.test\"\n")
            .expect("valid toml");
        assert_eq!(config.api.plan_detail, DEFAULT_PLAN_DETAIL_ENDPOINT);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(
            config.gallery.cache_capacity().value(),
            DEFAULT_IMAGE_CACHE_CAPACITY
        );
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid toml");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn overrides_replace_endpoints_and_ignore_blanks() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_BASE_URL, "https://env.example.com"),
            (ENV_API_QUOTES, "  "),
            (ENV_MEDIA_BASE_URL, "https://media.example.com"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(ToString::to_string));

        assert_eq!(config.api.base_url.as_deref(), Some("https://env.example.com"));
        assert_eq!(config.api.quotes, DEFAULT_QUOTES_ENDPOINT);
        assert_eq!(
            config.api.media_base_url.as_deref(),
            Some("https://media.example.com")
        );
    }

    #[test]
    fn default_config_has_no_reachable_endpoints() {
        let endpoints = Config::default().api.endpoints();
        assert!(endpoints.plan_detail.is_none());
        assert!(endpoints.quotes.is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            api: ApiConfig {
                request_timeout_secs: Some(0),
                ..ApiConfig::default()
            },
            gallery: GalleryConfig {
                image_cache_capacity: Some(1),
            },
            ..Config::default()
        };
        assert_eq!(config.api.request_timeout().as_secs(), 1);
        assert_eq!(config.gallery.cache_capacity().value(), 8);
    }
}
