//! Configuration for rotalog
//!
//! A configuration source is a JSON (or TOML) document in which every field
//! is optional. Fields that are present overwrite the built-in defaults,
//! absent fields leave them alone, and nested format objects are overlaid
//! field by field.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LoggerError, Result};
use crate::logging::{Format, Level};

/// Default configuration file, relative to the working directory
pub const CONFIG_FILE_NAME: &str = "log-config.json";

/// Default output directory, relative to the working directory
pub const LOGS_DIR_NAME: &str = "log-outputs";

/// Lines per file before rotation kicks in
pub const DEFAULT_FILE_CAPACITY: u64 = 100;

/// Partial format as it appears in a configuration source
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatPayload {
    #[serde(default)]
    pub show_date: Option<bool>,
    #[serde(default)]
    pub show_message: Option<bool>,
    #[serde(default)]
    pub show_level: Option<bool>,
}

impl FormatPayload {
    /// Apply the fields that are present on top of `base`
    pub fn overlay(&self, base: Format) -> Format {
        let mut format = base;
        if let Some(show) = self.show_date {
            format = format.with_timestamp(show);
        }
        if let Some(show) = self.show_message {
            format = format.with_message(show);
        }
        if let Some(show) = self.show_level {
            format = format.with_level(show);
        }
        format
    }
}

/// Configuration source contents, every field optional
///
/// Levels stay strings here so that an unknown name can be reported as
/// invalid rather than as an unreadable document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload {
    #[serde(default)]
    pub console_log_enabled: Option<bool>,
    #[serde(default)]
    pub console_message_format: Option<FormatPayload>,
    #[serde(default)]
    pub console_log_level: Option<String>,
    #[serde(default)]
    pub log_into_file_enabled: Option<bool>,
    #[serde(default)]
    pub log_file_capacity: Option<u64>,
    #[serde(default)]
    pub file_log_level: Option<String>,
    #[serde(default)]
    pub file_message_format: Option<FormatPayload>,
}

/// Routing settings for one sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkSettings {
    pub enabled: bool,
    pub min_level: Level,
    pub format: Format,
}

impl SinkSettings {
    /// Whether a message at `level` should reach this sink
    pub fn accepts(&self, level: Level) -> bool {
        self.enabled && crate::logging::is_at_least(level, self.min_level)
    }
}

impl Default for SinkSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            min_level: Level::Debug,
            format: Format::all(),
        }
    }
}

/// Fully merged logger configuration
///
/// Built once at startup and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    pub console: SinkSettings,
    pub file: SinkSettings,
    /// Rotation threshold for the file sink
    pub file_capacity: u64,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: SinkSettings::default(),
            file: SinkSettings::default(),
            file_capacity: DEFAULT_FILE_CAPACITY,
        }
    }
}

impl LoggerConfig {
    /// Defaults overlaid with `payload`
    pub fn from_payload(payload: &ConfigPayload) -> Result<Self> {
        Self::default().merge(payload)
    }

    /// Overlay the fields present in `payload`
    ///
    /// Computes the complete result before returning it; on error nothing
    /// has been applied.
    pub fn merge(self, payload: &ConfigPayload) -> Result<Self> {
        let mut console = self.console;
        let mut file = self.file;

        if let Some(enabled) = payload.console_log_enabled {
            console.enabled = enabled;
        }
        if let Some(format) = &payload.console_message_format {
            console.format = format.overlay(console.format);
        }
        if let Some(name) = &payload.console_log_level {
            console.min_level = parse_level("consoleLogLevel", name)?;
        }

        if let Some(enabled) = payload.log_into_file_enabled {
            file.enabled = enabled;
        }
        if let Some(format) = &payload.file_message_format {
            file.format = format.overlay(file.format);
        }
        if let Some(name) = &payload.file_log_level {
            file.min_level = parse_level("fileLogLevel", name)?;
        }

        Ok(Self {
            console,
            file,
            file_capacity: payload.log_file_capacity.unwrap_or(self.file_capacity),
        })
    }
}

fn parse_level(field: &'static str, name: &str) -> Result<Level> {
    name.parse().map_err(|_| LoggerError::ConfigInvalid {
        field,
        value: name.to_string(),
    })
}

/// Read and parse a configuration source
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
pub fn load_payload(path: &Path) -> Result<ConfigPayload> {
    let unavailable = |reason: String| LoggerError::ConfigUnavailable {
        path: path.to_path_buf(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&content).map_err(|e| unavailable(e.to_string()))
    } else {
        serde_json::from_str(&content).map_err(|e| unavailable(e.to_string()))
    }
}

/// Load and merge the configuration at `path`
///
/// A missing or unreadable source falls back to defaults with a warning.
/// An invalid value in a readable source is returned as an error.
pub fn resolve(path: Option<&Path>) -> Result<LoggerConfig> {
    let Some(path) = path else {
        return Ok(LoggerConfig::default());
    };

    match load_payload(path) {
        Ok(payload) => LoggerConfig::from_payload(&payload),
        Err(e) => {
            tracing::warn!("{}; using default configuration", e);
            Ok(LoggerConfig::default())
        }
    }
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    PathBuf::from(LOGS_DIR_NAME)
}
