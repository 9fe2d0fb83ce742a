// Views module - screen-level rendering logic
//
// One screen: form on top, the two project lists side by side, logs and
// status bar underneath. Modals and the toast are drawn over everything.

mod board;
mod modal;

use super::app::App;
use super::components::{logs_panel, status_bar, title_bar};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Rows of the form panel: three fields, a hint line, borders
const FORM_HEIGHT: u16 = 6;
const LOGS_HEIGHT: u16 = 7;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.bg));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(8),
            Constraint::Length(LOGS_HEIGHT),
            Constraint::Length(2),
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    board::render_form(f, chunks[1], app);
    board::render_lists(f, chunks[2], app);
    logs_panel::render(f, chunks[3], &app.log_buffer, &app.theme);
    status_bar::render(f, chunks[4], app);

    if let Some(ref modal_state) = app.modal {
        modal::render(f, modal_state, app);
    }

    // Toast sits above modals too
    if let Some(ref toast) = app.toast {
        let area = f.area();
        toast.render(f, area, &app.theme);
    }

    app.clear_expired_toast();
}
