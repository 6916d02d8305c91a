//! Configuration for the GRAHA dashboard.
//!
//! Locale and formatting options are explicit configuration passed down
//! to the metric functions, never ambient process state. All fields are
//! required unless explicitly marked optional.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    pub locale: Locale,
    pub refresh_interval_ms: u64,
    /// Module title shown first when the dashboard opens.
    pub initial_module: String,
}

/// Locale options injected into every formatting function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Locale {
    /// Currency prefix, e.g. "Rp".
    pub currency_symbol: String,
    /// Digit group separator, e.g. '.' for Indonesian formatting.
    pub thousands_separator: char,
    /// chrono format string for short dates, e.g. "%d/%m/%Y".
    pub date_format: String,
    /// Literal shown for missing values, e.g. "N/A".
    pub missing_placeholder: String,
}

impl Locale {
    /// Indonesian defaults: "Rp 1.000.000" and DD/MM/YYYY dates.
    pub fn indonesian() -> Self {
        Self {
            currency_symbol: "Rp".to_string(),
            thousands_separator: '.',
            date_format: "%d/%m/%Y".to_string(),
            missing_placeholder: "N/A".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: Locale::indonesian(),
            refresh_interval_ms: 30_000,
            initial_module: "assets".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.locale.currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "locale.currency_symbol",
                reason: "must not be empty".to_string(),
            });
        }
        if self.locale.date_format.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "locale.date_format",
                reason: "must not be empty".to_string(),
            });
        }
        if self.locale.missing_placeholder.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "locale.missing_placeholder",
                reason: "must not be empty".to_string(),
            });
        }
        if self.initial_module.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "initial_module",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
