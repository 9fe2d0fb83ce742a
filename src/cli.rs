// CLI module - command-line argument parsing and handlers
//
// Runtime flags pick the front-end and demo seeding. The `config`
// subcommand prints the effective config, or with `--path` / `--reset`
// locates or rewrites the file.

use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// projboard - drag-and-drop project board for the terminal
#[derive(Parser, Debug)]
#[command(name = "projboard")]
#[command(version = VERSION)]
#[command(about = "Drag-and-drop project board for the terminal", long_about = None)]
pub struct Cli {
    /// Read commands from stdin instead of starting the TUI
    #[arg(long)]
    pub headless: bool,

    /// Seed the board with sample projects
    #[arg(long)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective configuration, or manage the config file
    #[command(group(clap::ArgGroup::new("action").args(["reset", "path"])))]
    Config {
        /// Overwrite the config file with the defaults
        #[arg(long)]
        reset: bool,

        /// Print where the config file lives
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Fold runtime flags into the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if self.headless {
            config.enable_tui = false;
        }
        if self.demo {
            config.demo = true;
        }
    }
}

/// Run a subcommand if one was given. Returns true when the process should
/// exit afterwards.
pub fn handle_cli(cli: &Cli) -> Result<bool> {
    let Some(Commands::Config { reset, path }) = cli.command else {
        return Ok(false);
    };

    if path {
        handle_config_path()?;
    } else if reset {
        handle_config_reset()?;
    } else {
        handle_config_show();
    }
    Ok(true)
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
