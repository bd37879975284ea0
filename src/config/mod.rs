// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. The file is never written by the application.
//!
//! # Configuration Sections
//!
//! - `[service]` - Portfolio service address and HTTP timeout
//! - `[loader]` - Retry policy for the initial list fetch
//! - `[display]` - Compact layout threshold and thumbnail size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` launcher flag
//! 3. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! // Load configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let policy = config.retry_policy();
//! assert_eq!(policy.max_retries, config.retry_count());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::gallery::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Remote service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Base address of the portfolio service.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Timeout for a single HTTP request, in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Initial list fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoaderConfig {
    /// Retries after a failed fetch. Zero means a single attempt.
    #[serde(default = "default_retry_count", skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<u32>,

    /// Delay before the first retry, in milliseconds.
    #[serde(
        default = "default_retry_backoff_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub retry_backoff_ms: Option<u64>,

    /// Upper bound for one retry delay, in milliseconds.
    #[serde(
        default = "default_max_backoff_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_backoff_ms: Option<u64>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

/// Grid and overlay presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Viewport width below which the compact layout is used.
    #[serde(
        default = "default_compact_width_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub compact_width_threshold: Option<f32>,

    /// Edge length of a grid thumbnail.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            compact_width_threshold: default_compact_width_threshold(),
            thumbnail_size: default_thumbnail_size(),
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
    pub service: ServiceConfig,

    #[serde(default)]
    pub loader: LoaderConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Base address of the service, falling back to the default.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.service
            .base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .service
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Retry count, capped so a bad config cannot retry forever.
    #[must_use]
    pub fn retry_count(&self) -> u32 {
        self.loader
            .retry_count
            .unwrap_or(DEFAULT_RETRY_COUNT)
            .min(MAX_RETRY_COUNT)
    }

    /// Retry policy for the initial list fetch.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        let initial = self
            .loader
            .retry_backoff_ms
            .unwrap_or(DEFAULT_RETRY_BACKOFF_MS);
        let max = self
            .loader
            .max_backoff_ms
            .unwrap_or(DEFAULT_MAX_BACKOFF_MS)
            .max(initial);

        RetryPolicy {
            max_retries: self.retry_count(),
            initial_backoff: Duration::from_millis(initial),
            max_backoff: Duration::from_millis(max),
        }
    }

    #[must_use]
    pub fn compact_width_threshold(&self) -> f32 {
        self.display
            .compact_width_threshold
            .filter(|value| value.is_finite() && *value >= 0.0)
            .unwrap_or(DEFAULT_COMPACT_WIDTH_THRESHOLD)
    }

    #[must_use]
    pub fn thumbnail_size(&self) -> f32 {
        self.display
            .thumbnail_size
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_retry_count() -> Option<u32> {
    Some(DEFAULT_RETRY_COUNT)
}

fn default_retry_backoff_ms() -> Option<u64> {
    Some(DEFAULT_RETRY_BACKOFF_MS)
}

fn default_max_backoff_ms() -> Option<u64> {
    Some(DEFAULT_MAX_BACKOFF_MS)
}

fn default_compact_width_threshold() -> Option<f32> {
    Some(DEFAULT_COMPACT_WIDTH_THRESHOLD)
}

fn default_thumbnail_size() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with a warning message explaining what went wrong.
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
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
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
