//! Application configuration structures.

use std::fs;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::pipeline::timestamp::{AUTO_LOCALE, parse_locale};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where the dataset comes from and how to fetch it
    #[serde(default)]
    pub source: SourceConfig,

    /// Table presentation settings
    #[serde(default)]
    pub view: ViewConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.location.trim().is_empty() {
            return Err(AppError::validation("source.location is empty"));
        }
        if self.source.user_agent.trim().is_empty() {
            return Err(AppError::validation("source.user_agent is empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(AppError::validation("source.timeout_secs must be > 0"));
        }
        if self.view.page_size == 0 {
            return Err(AppError::validation("view.page_size must be > 0"));
        }
        if StrftimeItems::new(&self.view.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::validation(format!(
                "view.timestamp_format '{}' is not a valid strftime pattern",
                self.view.timestamp_format
            )));
        }
        let locale = self.view.locale.as_str();
        if !matches!(locale, AUTO_LOCALE | "C" | "POSIX") && parse_locale(locale).is_none() {
            return Err(AppError::validation(format!(
                "view.locale '{locale}' is not a known locale"
            )));
        }
        Ok(())
    }
}

/// Dataset source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL (`http`, `https`, `file`) or filesystem path of the dataset
    #[serde(default = "defaults::location")]
    pub location: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: defaults::location(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Table presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Records per page
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    /// chrono strftime pattern for snapshot timestamps
    #[serde(default = "defaults::timestamp_format")]
    pub timestamp_format: String,

    /// `auto` (LC_ALL / LC_TIME / LANG), `C`, or a locale name such as `fr_FR`
    #[serde(default = "defaults::locale")]
    pub locale: String,

    /// Text shown in the download column
    #[serde(default = "defaults::download_label")]
    pub download_label: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::page_size(),
            timestamp_format: defaults::timestamp_format(),
            locale: defaults::locale(),
            download_label: defaults::download_label(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when RUST_LOG is unset
    #[serde(default = "defaults::level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::level(),
        }
    }
}

mod defaults {
    use crate::pipeline::timestamp::{AUTO_LOCALE, LOCALE_FORMAT};

    // Source defaults
    pub fn location() -> String {
        "db.json".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; debarchive/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // View defaults
    pub fn page_size() -> usize {
        100
    }
    pub fn timestamp_format() -> String {
        LOCALE_FORMAT.into()
    }
    pub fn locale() -> String {
        AUTO_LOCALE.into()
    }
    pub fn download_label() -> String {
        "Download".into()
    }

    // Logging defaults
    pub fn level() -> String {
        "info".into()
    }
}
