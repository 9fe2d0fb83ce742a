//! Logs panel: the newest captured log lines, bottom-aligned

use crate::logging::{LogBuffer, LogEntry};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, buffer: &LogBuffer, theme: &Theme) {
    let rows = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = buffer
        .tail(rows)
        .iter()
        .map(|entry| ListItem::new(log_line(entry)).style(theme.log_style(entry.level)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" Logs ({}) ", buffer.captured())),
    );

    f.render_widget(list, area);
}

/// Local time, padded level, text
fn log_line(entry: &LogEntry) -> String {
    format!(
        "{} {:<5} {}",
        entry.at.with_timezone(&chrono::Local).format("%H:%M:%S"),
        entry.level.as_str(),
        entry.text
    )
}
