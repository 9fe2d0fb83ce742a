// Modal overlay rendering
//
// - Help modal: keyboard shortcuts
// - Alert modal: a document alert, dismissed with Enter or Esc

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Alert(message) => render_alert(f, app, message),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.active_list);
    let desc_style = Style::default().fg(app.theme.fg);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Form", header_style)),
        kb("Tab", "Next field / list"),
        kb("Shift+Tab", "Previous field / list"),
        kb("Enter", "Add project"),
        kb("Esc", "Leave the form"),
        Line::raw(""),
        Line::from(Span::styled("  Lists", header_style)),
        kb("↑/↓", "Select card"),
        kb("←/→", "Switch list"),
        kb("Space", "Pick up card"),
        Line::raw(""),
        Line::from(Span::styled("  Dragging", header_style)),
        kb("←/→", "Choose target list"),
        kb("Enter/Space", "Drop"),
        kb("Esc", "Cancel"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("y", "Copy board as JSON"),
        kb("?", "Toggle this help"),
        kb("q", "Quit (outside the form)"),
        kb("Ctrl+C", "Quit"),
    ]);

    let area = centered_rect(44, 27, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

fn render_alert(f: &mut Frame, app: &App, message: &str) {
    let width = (message.width() as u16 + 8).max(30);
    let area = centered_rect(width, 5, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(app.theme.alert)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().bg(app.theme.bg))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.alert))
            .border_type(app.theme.border_type)
            .title(" Alert ")
            .title_bottom(Line::from(" Enter to dismiss ").centered()),
    );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(80, 40, area), Rect::new(0, 0, 40, 10));
    }
}
