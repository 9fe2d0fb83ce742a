//! Toast: a short outcome message in the bottom-right corner
//!
//! Drawn last, over modals, and dropped by the view once it expires.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Failed,
}

pub struct Toast {
    pub outcome: Outcome,
    pub message: String,
    expires_at: Instant,
}

impl Toast {
    pub fn new(outcome: Outcome, message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            outcome,
            message: message.into(),
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn text(&self) -> String {
        let mark = match self.outcome {
            Outcome::Done => '✓',
            Outcome::Failed => '✗',
        };
        format!("{} {}", mark, self.message)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = self.text();
        let border = match self.outcome {
            Outcome::Done => theme.highlight,
            Outcome::Failed => theme.alert,
        };

        let rect = corner(area, text.width() as u16 + 4, 3);
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.fg).bg(theme.bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(border)),
            );

        f.render_widget(Clear, rect);
        f.render_widget(paragraph, rect);
    }
}

/// Rect of at most `width` x `height` inset two cells from the bottom-right
fn corner(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height);
    Rect::new(
        area.right().saturating_sub(width + 2),
        area.bottom().saturating_sub(height + 2),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        assert!(Toast::new(Outcome::Done, "done", Duration::ZERO).is_expired());
        assert!(!Toast::new(Outcome::Done, "done", Duration::from_secs(60)).is_expired());
    }

    #[test]
    fn text_is_marked_by_outcome() {
        let ttl = Duration::from_secs(1);
        assert_eq!(Toast::new(Outcome::Done, "Copied", ttl).text(), "✓ Copied");
        assert_eq!(Toast::new(Outcome::Failed, "No list", ttl).text(), "✗ No list");
    }

    #[test]
    fn corner_stays_inside_narrow_areas() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = corner(area, 60, 3);
        assert_eq!(rect.width, 16);
        assert_eq!(rect.right(), 18);
        assert_eq!(rect.bottom(), 8);
    }
}
