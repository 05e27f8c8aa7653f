//! Configuration management for logbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Offset, Utc};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the user config dir holding logbook's files.
const CONFIG_DIR_NAME: &str = "logbook";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "LOGBOOK_";

/// Minutes in a day; offsets must stay strictly inside it.
const MINUTES_PER_DAY: i32 = 24 * 60;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `LOGBOOK_`, sections split by `__`)
/// 2. TOML config file at `~/.config/logbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clock configuration.
    pub clock: ClockConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Clock-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Offset from UTC, in minutes, that decides where one day ends and the
    /// next begins when checking what is due today.
    pub utc_offset_minutes: i32,
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit JSON instead of text.
    pub json: bool,
    /// `strftime` format for dates in text output.
    pub date_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let config: Config = Self::figment(config_file).extract()?;
        config.validate()?;
        Ok(config)
    }

    fn figment(config_file: PathBuf) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let offset = self.clock.utc_offset_minutes;
        if offset.abs() >= MINUTES_PER_DAY {
            return Err(Error::ConfigValidation {
                message: format!(
                    "utc_offset_minutes ({offset}) must be within ±{}",
                    MINUTES_PER_DAY - 1
                ),
            });
        }

        if self.output.date_format.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "date_format must not be empty".to_string(),
            });
        }

        if StrftimeItems::new(&self.output.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::ConfigValidation {
                message: format!("invalid date_format: {}", self.output.date_format),
            });
        }

        Ok(())
    }

    /// The configured day-boundary offset.
    ///
    /// Falls back to UTC if the value was never validated and is out of range.
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        self.clock
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}
