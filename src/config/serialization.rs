//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        format!(
            r#"# projboard configuration

# Seed the board with sample projects at startup
demo = {demo}

# ─────────────────────────────────────────────────────────────────────────────
# TERMINAL UI
# ─────────────────────────────────────────────────────────────────────────────

[ui]
# Event poll interval in milliseconds
tick_ms = {tick_ms}
# How long toast notifications stay visible, in seconds
toast_secs = {toast_secs}

# ─────────────────────────────────────────────────────────────────────────────
# LOGGING
# ─────────────────────────────────────────────────────────────────────────────
# RUST_LOG overrides `level` when set.

[logging]
level = "{level}"
# Also write JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
# hourly, daily, never
file_rotation = "{file_rotation}"
"#,
            demo = self.demo,
            tick_ms = self.ui.tick_ms,
            toast_secs = self.ui.toast_secs,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.as_str(),
        )
    }
}
