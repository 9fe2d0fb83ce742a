//! Log output settings: level filter and the optional rolling log file

use anyhow::{bail, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// How often the log file starts over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

impl FromStr for LogRotation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "never" => Ok(Self::Never),
            other => bail!("unknown log rotation '{}' (use hourly, daily or never)", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for this crate's events: trace, debug, info, warn, error
    pub level: String,
    /// Also write JSON lines to a file
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix; the appender adds the date suffix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: super::APP_NAME.to_string(),
        }
    }
}

/// `[logging]` table of the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<PathBuf>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Overlay the keys the file sets
    ///
    /// An unknown rotation keeps the current one and warns on stderr; tracing
    /// is not running yet when the config loads.
    pub fn merge(&mut self, file: FileLogging) {
        if let Some(level) = file.level {
            self.level = level;
        }
        if let Some(enabled) = file.file_enabled {
            self.file_enabled = enabled;
        }
        if let Some(dir) = file.file_dir {
            self.file_dir = dir;
        }
        if let Some(prefix) = file.file_prefix {
            self.file_prefix = prefix;
        }
        if let Some(rotation) = file.file_rotation {
            match rotation.parse() {
                Ok(rotation) => self.file_rotation = rotation,
                Err(e) => eprintln!(
                    "Warning: {:#}, keeping {}",
                    e,
                    self.file_rotation.as_str()
                ),
            }
        }
    }

    /// Default `EnvFilter` directive when RUST_LOG is unset
    pub fn filter_directive(&self) -> String {
        format!("{}={}", super::APP_NAME, self.level)
    }
}
