// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the board

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod views;

use crate::board::Board;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::model::ProjectStatus;
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::Modal;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub fn run_tui(board: Board, log_buffer: LogBuffer, config: &Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(board, log_buffer, config);
    let result = run_event_loop(&mut terminal, &mut app, config);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Everything is synchronous: a key press runs the board's handlers to
/// completion before the next frame is drawn. The poll timeout doubles as
/// the redraw tick, so toasts expire and new log lines show up while idle.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> Result<()> {
    let tick = config.ui.tick();

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        if event::poll(tick).context("Failed to poll terminal events")? {
            if let Event::Key(key_event) = event::read().context("Failed to read terminal event")? {
                handle_key_event(app, key_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Leaving TUI");
    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Focused control
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Ctrl+C always quits, even from a modal or a text field
    if key_event.kind == KeyEventKind::Press
        && key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: Modal captures all input when active
    if !handle_modal_input(app, &key_event) {
        match key_event.kind {
            KeyEventKind::Press => match app.focus {
                Focus::Field(_) => handle_form_key(app, &key_event),
                Focus::List(status) => {
                    // Layer 2: Global keys only outside the form, where
                    // letters are text
                    if !handle_global_keys(app, &key_event) {
                        handle_list_key(app, status, &key_event);
                    }
                }
            },
            KeyEventKind::Release => app.release_key(key_event.code),
            _ => {}
        }
    }

    app.poll_alert();
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(closes) = app.modal.as_ref().map(|m| m.closes_on(key_event.code)) else {
        return false;
    };

    // Keep the key gate in sync, or keys stay "pressed" after the modal closes
    if key_event.kind == KeyEventKind::Release {
        app.release_key(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    if closes && app.accept_key(key_event.code) {
        app.modal = None;
    }

    true
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.accept_key(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('?') => {
            if app.accept_key(key) {
                app.modal = Some(Modal::Help);
            }
            true
        }
        KeyCode::Char('y') => {
            if app.accept_key(key) {
                app.copy_board();
            }
            true
        }
        _ => false,
    }
}

/// Keys while a form field has focus
fn handle_form_key(app: &mut App, key_event: &KeyEvent) {
    let key = key_event.code;

    match key {
        KeyCode::Tab | KeyCode::BackTab => {
            if app.accept_key(key) {
                if key == KeyCode::BackTab || key_event.modifiers.contains(KeyModifiers::SHIFT) {
                    app.focus_prev();
                } else {
                    app.focus_next();
                }
            }
        }
        KeyCode::Enter => {
            if app.accept_key(key) {
                app.submit();
            }
        }
        KeyCode::Esc => {
            if app.accept_key(key) {
                app.focus = Focus::List(ProjectStatus::Active);
            }
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.type_char(c)
        }
        _ => {}
    }
}

/// Keys while a list has focus, with or without a drag in progress
fn handle_list_key(app: &mut App, status: ProjectStatus, key_event: &KeyEvent) {
    let key = key_event.code;
    if !app.accept_key(key) {
        return;
    }

    if app.drag.is_some() {
        match key {
            KeyCode::Left => app.hover(ProjectStatus::Active),
            KeyCode::Right => app.hover(ProjectStatus::Finished),
            KeyCode::Enter | KeyCode::Char(' ') => app.drop_card(),
            KeyCode::Esc => app.cancel_drag(),
            _ => {}
        }
        return;
    }

    match key {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Left if status == ProjectStatus::Finished => {
            app.focus = Focus::List(ProjectStatus::Active)
        }
        KeyCode::Right if status == ProjectStatus::Active => {
            app.focus = Focus::List(ProjectStatus::Finished)
        }
        KeyCode::Char(' ') => app.pick_up(),
        _ => {}
    }
}
