//! Terminal UI settings

use serde::Deserialize;
use std::time::Duration;

/// Terminal UI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Event poll interval for the render loop (milliseconds)
    pub tick_ms: u64,
    /// How long toast notifications stay on screen (seconds)
    pub toast_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            toast_secs: 2,
        }
    }
}

/// UI settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileUi {
    pub tick_ms: Option<u64>,
    pub toast_secs: Option<u64>,
}

impl UiConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileUi>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            // A zero tick would spin the loop
            tick_ms: file.tick_ms.filter(|t| *t > 0).unwrap_or(defaults.tick_ms),
            toast_secs: file.toast_secs.unwrap_or(defaults.toast_secs),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_secs)
    }
}
