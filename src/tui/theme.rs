// Board colors
//
// ANSI palette only, so the board follows whatever colors the terminal
// already uses.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,
    pub title: Color,
    pub status_bar: Color,
    pub highlight: Color,
    pub active_list: Color,
    pub finished_list: Color,
    /// Border of a list that would take the dragged card
    pub droppable: Color,
    /// The card being dragged
    pub dragging: Color,
    pub alert: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,
            title: Color::Cyan,
            status_bar: Color::Green,
            highlight: Color::Yellow,
            active_list: Color::Cyan,
            finished_list: Color::Green,
            droppable: Color::Yellow,
            dragging: Color::Magenta,
            alert: Color::Red,
        }
    }
}

impl Theme {
    pub fn log_style(&self, level: Level) -> Style {
        let color = match level {
            Level::ERROR => self.alert,
            Level::WARN => self.highlight,
            Level::INFO => self.fg,
            Level::DEBUG => self.border,
            _ => self.muted,
        };
        Style::default().fg(color)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Selected card in the focused list
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.muted)
            .fg(self.fg)
            .add_modifier(Modifier::BOLD)
    }
}
