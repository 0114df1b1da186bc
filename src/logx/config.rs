//! Serializable logging configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::level::{LogFormat, LogLevel};
use super::logger::{Builder, Logger};
use crate::error::Result;

/// Logging settings as they appear in a configuration file.
///
/// ```json
/// { "level": "warn", "format": "json", "levels": { "Billing.Invoices": "debug" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Pattern to level, see [`super::LogLevelManager`]
    pub levels: BTreeMap<String, LogLevel>,
    /// Attribute keys joining `service` and `component` in pattern paths
    pub pattern_keys: Vec<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Text,
            levels: BTreeMap::new(),
            pattern_keys: Vec::new(),
        }
    }
}

impl LogConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the level for one pattern
    pub fn pattern_level(mut self, pattern: impl Into<String>, level: LogLevel) -> Self {
        self.levels.insert(pattern.into(), level);
        self
    }

    pub fn pattern_key(mut self, key: impl Into<String>) -> Self {
        self.pattern_keys.push(key.into());
        self
    }

    /// A console logger with these settings.
    pub fn logger(&self) -> Result<Logger> {
        Ok(Builder::from_config(self)?.writing_to_console().logger())
    }
}
