//! Configuration module for filterbar
//!
//! Defaults for the filter bar and its URL sync, read from a TOML file in
//! the user's config directory (or a path given on the command line). A
//! missing file means defaults.
//!
//! ```toml
//! placeholder = "Add filter"
//!
//! [url]
//! enabled = true
//! key = "filters"
//! default_page_size = 20
//!
//! [selection]
//! auto_select_single = true
//! blur_delay_ms = 100
//!
//! [display]
//! date_format = "%Y-%m-%d"
//! range_separator = " ~ "
//! ```

use crate::bar::{DEFAULT_PLACEHOLDER, FilterBarOptions};
use crate::selection::DisplayOptions;
use crate::url::{DEFAULT_KEY, DEFAULT_PAGE_SIZE, UrlSyncOptions};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// URL sync settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UrlConfig {
    /// Mirror filters and pagination into the location
    pub enabled: bool,
    /// Query parameter holding the filters
    pub key: String,
    /// Page size when the location has none
    pub default_page_size: u32,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            key: DEFAULT_KEY.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Selection behavior settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SelectionConfig {
    /// Auto-select the only definition of a one-entry catalog
    pub auto_select_single: bool,
    /// Blur reset delay in milliseconds
    pub blur_delay_ms: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            auto_select_single: true,
            blur_delay_ms: 100,
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FilterbarConfig {
    /// Placeholder shown by an empty bar
    pub placeholder: String,

    /// URL sync settings
    pub url: UrlConfig,

    /// Selection behavior
    pub selection: SelectionConfig,

    /// Display value formatting
    pub display: DisplayOptions,
}

impl Default for FilterbarConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            url: UrlConfig::default(),
            selection: SelectionConfig::default(),
            display: DisplayOptions::default(),
        }
    }
}

impl FilterbarConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("filterbar").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or holds
    /// invalid values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::config_path()?),
        }
    }

    /// Load from `path`; a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or holds
    /// invalid values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration to `path` as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }
        fs::write(path, self.to_toml_string()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))
    }

    /// Render as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Check values serde cannot
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` for an empty URL key or a zero page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.key.trim().is_empty() {
            return Err(ConfigError::Message("url.key must not be empty".to_string()));
        }
        if self.url.default_page_size == 0 {
            return Err(ConfigError::Message(
                "url.default_page_size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Filter bar options described by this configuration
    #[must_use]
    pub fn bar_options(&self) -> FilterBarOptions {
        FilterBarOptions {
            auto_select_single: self.selection.auto_select_single,
            blur_delay: Duration::from_millis(self.selection.blur_delay_ms),
            display: self.display.clone(),
        }
    }

    /// URL sync options, `None` when URL sync is disabled
    #[must_use]
    pub fn url_options(&self) -> Option<UrlSyncOptions> {
        self.url.enabled.then(|| UrlSyncOptions {
            key: self.url.key.clone(),
            default_page_size: self.url.default_page_size,
        })
    }
}
