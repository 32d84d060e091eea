//! Configuration for the lookup demo host.
//!
//! Configuration is loaded from `<config dir>/cq-lookup/lookup.toml` and
//! provides window, logging and display settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "cq-lookup";
const CONFIG_FILE_NAME: &str = "lookup.toml";

/// Host configuration loaded from `lookup.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

/// Lookup display settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub placeholder_text: String,
    /// Favorites namespace for the row toggles.
    pub favorites_id: String,
    /// Mobile layout drops chip hover styling.
    pub is_mobile: bool,
    /// Category list to show; the built-in sample is used when unset.
    pub catalog: Option<PathBuf>,
    /// `[strings]` table of translations.
    pub translations: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Symbol Lookup".to_string(),
            width: 480.0,
            height: 640.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(std::env::temp_dir().join("cq-lookup.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "mouseenter".to_string(),
                "mouseleave".to_string(),
                "pointermove".to_string(),
            ],
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder_text: "Search...".to_string(),
            favorites_id: "chartTitle".to_string(),
            is_mobile: false,
            catalog: None,
            translations: None,
        }
    }
}

impl LookupConfig {
    /// Path of the default config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        use etcetera::BaseStrategy;

        let strategy = etcetera::choose_base_strategy().ok()?;
        Some(strategy.config_dir().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let config =
            toml::from_str::<LookupConfig>(&content).with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Set the catalog file to display.
    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.display.catalog = Some(path.into());
        self
    }

    /// Use the mobile layout.
    #[must_use]
    pub fn with_mobile(mut self, is_mobile: bool) -> Self {
        self.display.is_mobile = is_mobile;
        self
    }
}
