// Startup module - displays banner and module status
//
// Printed before the TUI takes over the screen (or in headless mode), and
// mirrored into the logs panel so the boot sequence stays visible.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// Module status for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

/// Print the startup banner and module status
pub fn print_startup(config: &Config) {
    use colors::*;

    // Banner goes to stderr so headless stdout stays scriptable
    eprintln!();
    eprintln!("  {BOLD}{CYAN}projboard{RESET} {DIM}v{VERSION}{RESET}");
    eprintln!("  {DIM}Drag-and-drop project board{RESET}");
    eprintln!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            eprintln!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            eprintln!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    eprintln!();

    for module in &module_status(config) {
        let (icon, style) = if module.enabled {
            (format!("{GREEN}✓{RESET}"), "")
        } else {
            (format!("{DIM}○{RESET}"), DIM)
        };
        eprintln!(
            "    {icon} {style}{:<10}{RESET} {DIM}{}{RESET}",
            module.name, module.description
        );
    }
    eprintln!();

    if config.demo {
        eprintln!("  {YELLOW}▸{RESET} {YELLOW}Demo mode active{RESET} {DIM}(sample projects){RESET}");
        eprintln!();
    }
}

/// Status of all modules based on config
pub fn module_status(config: &Config) -> Vec<ModuleStatus> {
    vec![
        ModuleStatus {
            name: "board",
            enabled: true,
            description: "Projects, lists and form",
        },
        ModuleStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: "Terminal interface",
        },
        ModuleStatus {
            name: "headless",
            enabled: !config.enable_tui,
            description: "Line commands on stdin",
        },
        ModuleStatus {
            name: "demo",
            enabled: config.demo,
            description: "Sample projects",
        },
        ModuleStatus {
            name: "log-file",
            enabled: config.logging.file_enabled,
            description: "Rotating JSON logs",
        },
    ]
}

/// Print startup messages to the logs panel
pub fn log_startup(config: &Config) {
    tracing::info!("═══════════════════════════════════");
    tracing::info!("  PROJBOARD v{}", VERSION);
    tracing::info!("═══════════════════════════════════");

    for module in &module_status(config) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }

    tracing::info!("Ready. Press ? for help.");
}
