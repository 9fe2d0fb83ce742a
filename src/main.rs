// projboard - drag-and-drop project board for the terminal
//
// A form adds projects, two lists show them by status, and cards move
// between lists by drag and drop.
//
// Architecture:
// - Document (dom): in-memory element tree with templates and event dispatch
// - Components: form, lists and cards rendered into the document
// - Store (state): the one project collection, notifying subscribers
// - Board: mounts everything and exposes user-level actions
// - Front-ends: TUI (ratatui) or headless line commands on stdin

mod board;
mod cli;
mod components;
mod config;
mod demo;
mod dom;
mod headless;
mod logging;
mod model;
mod page;
mod startup;
mod state;
mod tui;
mod validation;

use anyhow::{Context, Result};
use board::Board;
use clap::Parser;
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use std::io::IsTerminal;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing
///
/// TUI mode captures events into `log_buffer` so they never reach the
/// alternate screen; headless mode writes them to stderr. An optional JSON
/// file layer is added on top of either. The returned guard must be kept
/// alive for the file writer to flush.
///
/// Precedence: RUST_LOG env var > config level
fn init_tracing(
    logging: &LoggingConfig,
    enable_tui: bool,
    log_buffer: &LogBuffer,
) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let console_layer = if enable_tui {
        TuiLogLayer::new(log_buffer.clone()).boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match file_writer(logging) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

/// Rolling non-blocking file writer, if file logging is enabled and usable
fn file_writer(
    logging: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    Some(tracing_appender::non_blocking(appender))
}

fn main() -> Result<()> {
    // Handle CLI subcommands first (config, config --reset, config --path)
    let cli = cli::Cli::parse();
    if cli::handle_cli(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    cli.apply(&mut config);

    // Without a terminal there is nothing to draw on
    if config.enable_tui && !std::io::stdout().is_terminal() {
        config.enable_tui = false;
    }

    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config.logging, config.enable_tui, &log_buffer);

    startup::print_startup(&config);
    startup::log_startup(&config);

    let board = Board::mount().context("Failed to mount board")?;

    if config.demo {
        tracing::info!("Running in DEMO MODE - seeding sample projects");
        demo::seed(&board)?;
    }

    if config.enable_tui {
        tracing::info!("Starting TUI");
        tui::run_tui(board, log_buffer, &config)?;
    } else {
        tracing::info!("TUI disabled, running in headless mode");
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        headless::run(&board, stdin.lock(), &mut stdout)?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
