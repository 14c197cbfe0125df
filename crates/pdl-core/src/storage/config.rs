//! Configuration management
//!
//! Process-wide settings are resolved once at startup into an explicit
//! [`Config`] value. Priority: CLI argument / environment > settings file > default.

use crate::api::client::DEFAULT_BASE_URL;
use crate::error::{ConfigError, StorageError};
use crate::utils::logging::LogLevel;
use crate::utils::validation::{validate_api_key, validate_url};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Optional settings file (`~/.config/pdl-cli/config.toml`)
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// PDL API base URL
    pub base_url: Option<String>,
    /// Directory result files are written to
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from file. A missing file, or no config directory to
    /// look in, yields defaults.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let Some(settings_path) = path.or_else(|| Self::settings_file_path(dirs::config_dir()))
        else {
            log::debug!("No configuration directory, using default settings");
            return Ok(Settings::default());
        };

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&settings_path).map_err(|source| StorageError::FileIo {
            path: settings_path.to_string_lossy().to_string(),
            source,
        })?;

        let settings: Settings =
            toml::from_str(&content).map_err(|e| ConfigError::SettingsParse {
                path: settings_path.to_string_lossy().to_string(),
                message: e.to_string(),
            })?;

        Ok(settings)
    }

    fn settings_file_path(config_dir: Option<PathBuf>) -> Option<PathBuf> {
        config_dir.map(|dir| dir.join("pdl-cli").join("config.toml"))
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub log_level: Option<String>,
    pub base_url: Option<String>,
    pub output_dir: Option<PathBuf>,
}

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub log_level: LogLevel,
    pub base_url: String,
    pub output_dir: PathBuf,
}

impl Config {
    /// Merge overrides over settings. A missing API key is fatal.
    pub fn resolve(overrides: ConfigOverrides, settings: Settings) -> Result<Self, ConfigError> {
        let api_key = overrides.api_key.unwrap_or_default();
        validate_api_key(&api_key)?;

        let log_level = match overrides.log_level.as_deref() {
            Some(level) if !level.trim().is_empty() => level.parse()?,
            _ => LogLevel::default(),
        };

        let base_url = overrides
            .base_url
            .or(settings.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_url(&base_url)?;

        let output_dir = overrides
            .output_dir
            .or(settings.output_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Ok(Config {
            api_key,
            log_level,
            base_url,
            output_dir,
        })
    }
}
