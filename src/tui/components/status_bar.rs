// Status bar component
//
// Uptime and project counts, followed by hints for the focused control.

use crate::model::ProjectStatus;
use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Narrow terminals drop the key hints.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let counts = format!(
        " {} │ {} active │ {} finished",
        app.uptime(),
        app.board.project_count(ProjectStatus::Active),
        app.board.project_count(ProjectStatus::Finished),
    );

    let text = if Breakpoint::from_width(area.width).at_least(Breakpoint::Wide) {
        format!("{} │ {}", counts, hints(app))
    } else {
        counts
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

fn hints(app: &App) -> &'static str {
    if app.drag.is_some() {
        return "←/→ target  Enter/Space drop  Esc cancel";
    }
    match app.focus {
        Focus::Field(_) => "Tab next field  Enter add  Esc to lists",
        Focus::List(_) => "↑/↓ select  Space pick up  Tab focus  y copy  ? help  q quit",
    }
}
