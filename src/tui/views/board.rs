// Board view - the form and the two project lists
//
// Everything shown here is read back from the document through `Board`, so
// what is drawn is exactly what the components rendered.

use crate::board::{CardView, FormField};
use crate::model::ProjectStatus;
use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::Title => "Title",
        FormField::Description => "Description",
        FormField::People => "People",
    }
}

/// Render the project form
pub fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus.field().is_some();

    let mut lines: Vec<Line> = FormField::all()
        .iter()
        .map(|field| {
            let is_focused = app.focus == Focus::Field(*field);
            let label_style = if is_focused {
                Style::default()
                    .fg(theme.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            let cursor = if is_focused { "▏" } else { "" };
            Line::from(vec![
                Span::styled(format!(" {:<12}", field_label(*field)), label_style),
                Span::styled(app.board.field_value(*field), Style::default().fg(theme.fg)),
                Span::styled(cursor, Style::default().fg(theme.border_focused)),
            ])
        })
        .collect();

    lines.push(Line::from(Span::styled(
        " Enter: ADD PROJECT",
        Style::default().fg(theme.muted),
    )));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(" New Project "),
    );

    f.render_widget(form, area);
}

/// Render both project lists side by side
pub fn render_lists(f: &mut Frame, area: Rect, app: &App) {
    // Narrow terminals stack the lists
    let direction = if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let columns = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (status, column) in ProjectStatus::all().iter().zip(columns.iter()) {
        render_list(f, *column, app, *status);
    }
}

fn render_list(f: &mut Frame, area: Rect, app: &App, status: ProjectStatus) {
    let theme = &app.theme;
    let focused = app.focus == Focus::List(status);
    let droppable = app.board.is_droppable(status);
    let cards = app.board.cards(status);

    let accent = match status {
        ProjectStatus::Active => theme.active_list,
        ProjectStatus::Finished => theme.finished_list,
    };
    let border_style = if droppable {
        Style::default()
            .fg(theme.droppable)
            .add_modifier(Modifier::BOLD)
    } else if focused {
        theme.border_style(true)
    } else {
        Style::default().fg(accent)
    };

    let items: Vec<ListItem> = cards.iter().map(|card| card_item(app, card)).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(border_style)
                .title(format!(" {} ", app.board.heading(status))),
        )
        .highlight_style(theme.selected());

    let mut state = ListState::default();
    if focused {
        state.select(app.selected_index(status));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn card_item<'a>(app: &App, card: &'a CardView) -> ListItem<'a> {
    let theme = &app.theme;
    let marker = if app.is_dragging(&card.id) {
        Span::styled("⇅ ", Style::default().fg(theme.dragging))
    } else {
        Span::raw("  ")
    };

    ListItem::new(vec![
        Line::from(vec![
            marker,
            Span::styled(
                card.title.as_str(),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", card.persons),
            Style::default().fg(theme.highlight),
        )),
        Line::from(Span::styled(
            format!("  {}", card.description),
            Style::default().fg(theme.muted),
        )),
        Line::raw(""),
    ])
}
