use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::AppError;

/// Application configuration module
/// This module handles the converter configuration including loading
/// and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Line terminator written after every SRT line
    #[serde(default)]
    pub line_ending: LineEnding,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::File(format!("Failed to read config {}: {}", path.display(), e)))?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .map_err(|e| AppError::File(format!("Failed to write config {}: {}", path.display(), e)))?;
        Ok(())
    }
}

/// Line terminator used for SRT output
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    // @ending: Platform convention
    #[default]
    Native,
    // @ending: "\n"
    Lf,
    // @ending: "\r\n"
    CrLf,
}

impl LineEnding {
    /// Map `Native` onto the terminator of the current platform
    pub fn resolve(self) -> Self {
        match self {
            Self::Native if cfg!(windows) => Self::CrLf,
            Self::Native => Self::Lf,
            other => other,
        }
    }

    /// Terminator bytes
    pub fn as_bytes(self) -> &'static [u8] {
        match self.resolve() {
            Self::CrLf => b"\r\n",
            _ => b"\n",
        }
    }

    // @returns: Lowercase identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Native => "native".to_string(),
            Self::Lf => "lf".to_string(),
            Self::CrLf => "crlf".to_string(),
        }
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for LineEnding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "lf" | "unix" => Ok(Self::Lf),
            "crlf" | "dos" | "windows" => Ok(Self::CrLf),
            _ => Err(anyhow::anyhow!("Invalid line ending: {}", s)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
