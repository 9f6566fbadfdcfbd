// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[slideshow]` - Rotation interval and hover pausing
//! - `[contact]` - Delivery method, relay endpoint and key, subjects and the
//!   header inquiry
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI flag or `ICED_SHOWCASE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_showcase::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("rotating every {} ms", config.slideshow.interval().millis());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::contact::ContactChannel;
use crate::domain::slideshow::RotationInterval;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Slideshow behaviour.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Rotation period in milliseconds, raised to the minimum on use.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: Option<u64>,

    /// Pause rotation while the pointer is over a slideshow.
    #[serde(default = "default_pause_on_hover")]
    pub pause_on_hover: Option<bool>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            pause_on_hover: default_pause_on_hover(),
        }
    }
}

impl SlideshowConfig {
    #[must_use]
    pub fn interval(&self) -> RotationInterval {
        self.interval_ms
            .map_or_else(RotationInterval::default, RotationInterval::new)
    }

    #[must_use]
    pub fn pauses_on_hover(&self) -> bool {
        self.pause_on_hover.unwrap_or(DEFAULT_PAUSE_ON_HOVER)
    }
}

/// How contact buttons deliver a message.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    /// Modal form posting to the relay.
    #[default]
    Form,
    /// `mailto:` link opened in the mail client.
    Email,
}

/// Contact settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ContactConfig {
    #[serde(default)]
    pub method: ContactMethod,

    /// Recipient for the `email` method.
    #[serde(default)]
    pub email: Option<String>,

    /// Relay endpoint receiving the form POST.
    #[serde(default = "default_endpoint")]
    pub endpoint: Option<String>,

    /// Relay access key. The environment variable wins when both are set.
    #[serde(default)]
    pub access_key: Option<String>,

    /// Subject used when the form opens without one.
    #[serde(default)]
    pub default_subject: Option<String>,

    /// Subject of the header contact button. Localized text when unset.
    #[serde(default)]
    pub inquiry_subject: Option<String>,

    /// Prefilled message of the header contact button. Localized text when
    /// unset.
    #[serde(default)]
    pub inquiry_message: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            method: ContactMethod::default(),
            email: None,
            endpoint: default_endpoint(),
            access_key: None,
            default_subject: None,
            inquiry_subject: None,
            inquiry_message: None,
        }
    }
}

impl ContactConfig {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_RELAY_ENDPOINT)
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        self.default_subject
            .as_deref()
            .unwrap_or(DEFAULT_CONTACT_SUBJECT)
    }

    /// Where contact buttons send the user. The email method needs an
    /// address; without one the form is used.
    #[must_use]
    pub fn channel(&self) -> ContactChannel {
        match (self.method, self.email.as_deref().map(str::trim)) {
            (ContactMethod::Email, Some(address)) if !address.is_empty() => {
                ContactChannel::Email {
                    address: address.to_string(),
                }
            }
            (ContactMethod::Email, _) => {
                tracing::warn!("contact method is email but no address is set; using the form");
                ContactChannel::Form
            }
            (ContactMethod::Form, _) => ContactChannel::Form,
        }
    }

    /// Access key from `ICED_SHOWCASE_WEB3FORMS_KEY`, else from the file.
    #[must_use]
    pub fn resolved_access_key(&self) -> Option<String> {
        std::env::var(ENV_RELAY_ACCESS_KEY)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.access_key.clone())
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_interval_ms() -> Option<u64> {
    Some(DEFAULT_INTERVAL_MS)
}

fn default_pause_on_hover() -> Option<bool> {
    Some(DEFAULT_PAUSE_ON_HOVER)
}

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_RELAY_ENDPOINT.to_string())
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
/// default config with the i18n key of a warning to show.
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

// =============================================================================
// Tests
// =============================================================================
