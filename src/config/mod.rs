//! Board configuration
//!
//! Each setting resolves as: environment variable, then
//! `~/.config/projboard/config.toml`, then the built-in default.

use serde::Deserialize;
use std::path::PathBuf;

mod log_output;
mod serialization;
mod ui;


pub use log_output::{FileLogging, LogRotation, LoggingConfig};
pub use ui::{FileUi, UiConfig};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name, used for the config directory and the default log filter
pub const APP_NAME: &str = "projboard";

#[derive(Debug, Clone)]
pub struct Config {
    /// False in headless mode
    pub enable_tui: bool,
    /// Seed the board with sample projects at startup
    pub demo: bool,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_tui: true,
            demo: false,
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// The config file as written; every key is optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub demo: Option<bool>,
    pub ui: Option<FileUi>,
    pub logging: Option<FileLogging>,
}

/// Interpret "1" / "true" (any case) as on
fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

impl Config {
    /// `~/.config/projboard/config.toml`, on every platform
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(APP_NAME).join("config.toml"))
    }

    /// Write the commented default file on first run
    ///
    /// Failure is silent: the board runs fine on defaults.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path().filter(|p| !p.exists()) else {
            return;
        };
        let written = path
            .parent()
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|()| std::fs::write(&path, Self::default().to_toml()));
        if let Err(e) = written {
            tracing::debug!("Could not write config template {}: {}", path.display(), e);
        }
    }

    /// Parse config file contents
    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The file's settings, or none at all if it is missing, unreadable or
    /// malformed. Problems are reported on stderr.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::parse_file_config(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: ignoring invalid config {}: {}", path.display(), e);
                    eprintln!("  Run `{} config --reset` to regenerate it.", APP_NAME);
                    FileConfig::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Warning: cannot read config {}: {}", path.display(), e);
                FileConfig::default()
            }
        }
    }

    pub fn from_env() -> Self {
        Self::from_sources(Self::load_file_config())
    }

    /// Layer environment overrides over an already-parsed file
    pub(crate) fn from_sources(file: FileConfig) -> Self {
        // Env only; the file has no TUI switch
        let enable_tui = env_flag("PROJBOARD_NO_TUI").map(|off| !off).unwrap_or(true);

        // Demo seeding: env > file > default
        let demo = env_flag("PROJBOARD_DEMO")
            .or(file.demo)
            .unwrap_or(false);

        let ui = UiConfig::from_file(file.ui);

        // Log level: env > file > default
        let mut logging = LoggingConfig::default();
        if let Some(file_logging) = file.logging {
            logging.merge(file_logging);
        }
        if let Ok(level) = std::env::var("PROJBOARD_LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            enable_tui,
            demo,
            ui,
            logging,
        }
    }
}
