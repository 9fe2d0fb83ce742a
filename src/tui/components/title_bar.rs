// Title bar component
//
// App name, plus the card being dragged while a keyboard drag is active.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let drag_indicator = match &app.drag {
        Some(session) => {
            let target = session
                .over()
                .map(|s| format!(" → {}", s))
                .unwrap_or_default();
            format!(" ──── ⇅ dragging {}{}", short_id(&session.project_id), target)
        }
        None => String::new(),
    };

    let title = Paragraph::new(format!(" Project Board{}", drag_indicator))
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}

/// First segment of a UUID
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
