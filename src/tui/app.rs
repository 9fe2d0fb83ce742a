// App state for the board TUI
//
// Holds the mounted board plus everything the terminal adds on top of it:
// which control has focus, the selected card per list, an in-flight keyboard
// drag, and overlays. All board changes go through `Board`, so the document
// and store stay the single source of truth for what is drawn.

use super::components::{Outcome, Toast};
use super::input::KeyGate;
use super::modal::Modal;
use super::theme::Theme;
use crate::board::{Board, DragSession, FormField};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::model::ProjectStatus;
use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Toast for a drop that no list took, whether or not one was hovered
const DROP_REFUSED: &str = "Drop cancelled: no list accepted the card";

/// What keyboard input currently goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    List(ProjectStatus),
}

impl Focus {
    /// Tab order: form fields top to bottom, then lists left to right
    pub fn order() -> Vec<Focus> {
        FormField::all()
            .iter()
            .map(|f| Focus::Field(*f))
            .chain(ProjectStatus::all().iter().map(|s| Focus::List(*s)))
            .collect()
    }

    fn step(self, forward: bool) -> Focus {
        let order = Self::order();
        let idx = order.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % order.len()
        } else {
            (idx + order.len() - 1) % order.len()
        };
        order[next]
    }

    pub fn field(&self) -> Option<FormField> {
        match self {
            Focus::Field(field) => Some(*field),
            Focus::List(_) => None,
        }
    }

    pub fn list(&self) -> Option<ProjectStatus> {
        match self {
            Focus::List(status) => Some(*status),
            Focus::Field(_) => None,
        }
    }
}

/// Main application state
pub struct App {
    pub board: Board,
    pub focus: Focus,
    /// Selected card index per list
    selected: HashMap<ProjectStatus, usize>,
    /// Keyboard drag in progress
    pub drag: Option<DragSession>,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    toast_duration: Duration,

    pub log_buffer: LogBuffer,
    pub theme: Theme,

    keys: KeyGate,
    pub should_quit: bool,
    started_at: Instant,
}

impl App {
    pub fn new(board: Board, log_buffer: LogBuffer, config: &Config) -> Self {
        Self {
            board,
            focus: Focus::Field(FormField::Title),
            selected: HashMap::new(),
            drag: None,
            modal: None,
            toast: None,
            toast_duration: config.ui.toast_duration(),
            log_buffer,
            theme: Theme::default(),
            keys: KeyGate::new(),
            should_quit: false,
            started_at: Instant::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Key gating
    // ─────────────────────────────────────────────────────────────

    /// Whether a key press should act, given presses already seen
    pub fn accept_key(&mut self, key: KeyCode) -> bool {
        self.keys.press(key)
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys.release(key);
    }

    // ─────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.focus = self.focus.step(true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.step(false);
    }

    // ─────────────────────────────────────────────────────────────
    // Form editing
    // ─────────────────────────────────────────────────────────────

    /// Append a typed character to the focused field
    pub fn type_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.board.field_value(field);
        value.push(c);
        self.set_field(field, &value);
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.board.field_value(field);
        value.pop();
        self.set_field(field, &value);
    }

    fn set_field(&mut self, field: FormField, value: &str) {
        if let Err(e) = self.board.set_field_value(field, value) {
            tracing::error!("{:#}", e);
        }
    }

    /// Submit the form, surfacing any alert as a modal
    pub fn submit(&mut self) {
        let before = self.board.store().len();
        if let Err(e) = self.board.submit_form() {
            tracing::error!("Submit failed: {:#}", e);
            return;
        }
        if self.board.store().len() > before {
            self.notify(Outcome::Done, "Project added");
            self.focus = Focus::Field(FormField::Title);
        }
        self.poll_alert();
    }

    /// Move the oldest pending document alert into a modal
    pub fn poll_alert(&mut self) {
        if self.modal.is_none() {
            if let Some(message) = self.board.take_alert() {
                self.modal = Some(Modal::alert(message));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Card selection
    // ─────────────────────────────────────────────────────────────

    /// Selected card index in a list, clamped to the cards on screen
    pub fn selected_index(&self, status: ProjectStatus) -> Option<usize> {
        let count = self.board.cards(status).len();
        let idx = self.selected.get(&status).copied().unwrap_or(0);
        (count > 0).then(|| idx.min(count - 1))
    }

    pub fn select_prev(&mut self) {
        if let Some(status) = self.focus.list() {
            if let Some(idx) = self.selected_index(status) {
                self.selected.insert(status, idx.saturating_sub(1));
            }
        }
    }

    pub fn select_next(&mut self) {
        if let Some(status) = self.focus.list() {
            if let Some(idx) = self.selected_index(status) {
                let last = self.board.cards(status).len() - 1;
                self.selected.insert(status, (idx + 1).min(last));
            }
        }
    }

    fn select_project(&mut self, status: ProjectStatus, project_id: &str) {
        if let Some(idx) = self
            .board
            .cards(status)
            .iter()
            .position(|c| c.id == project_id)
        {
            self.selected.insert(status, idx);
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Keyboard drag and drop
    // ─────────────────────────────────────────────────────────────

    /// Pick up the selected card in the focused list
    pub fn pick_up(&mut self) {
        let Some(status) = self.focus.list() else {
            return;
        };
        let Some(idx) = self.selected_index(status) else {
            return;
        };
        let cards = self.board.cards(status);
        let Some(card) = cards.get(idx) else {
            return;
        };
        self.drag = self.board.start_drag(&card.id);
        if self.drag.is_some() {
            tracing::debug!("Picked up '{}'", card.title);
        }
    }

    /// Hover the drag over a list
    pub fn hover(&mut self, status: ProjectStatus) {
        if let Some(session) = self.drag.as_mut() {
            self.board.drag_over(session, status);
        }
    }

    /// Drop the dragged card on the hovered list
    pub fn drop_card(&mut self) {
        let Some(session) = self.drag.take() else {
            return;
        };
        let target = session.over();
        let project_id = session.project_id.clone();

        if self.board.drop_drag(session) {
            if let Some(status) = target {
                self.focus = Focus::List(status);
                self.select_project(status, &project_id);
            }
        } else {
            self.notify(Outcome::Failed, DROP_REFUSED);
        }
    }

    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            self.board.cancel_drag(session);
        }
    }

    pub fn is_dragging(&self, project_id: &str) -> bool {
        self.drag.as_ref().is_some_and(|d| d.project_id == project_id)
    }

    // ─────────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────────

    /// JSON dump of every project in the store
    pub fn board_json(&self) -> Option<String> {
        match serde_json::to_string_pretty(&*self.board.store().dump_projects()) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::error!("Failed to serialize board: {}", e);
                None
            }
        }
    }

    pub fn copy_board(&mut self) {
        let Some(json) = self.board_json() else {
            self.notify(Outcome::Failed, "Failed to copy");
            return;
        };
        match super::clipboard::copy_to_clipboard(&json) {
            Ok(()) => self.notify(Outcome::Done, "Copied board JSON to clipboard"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.notify(Outcome::Failed, "Failed to copy");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────

    pub fn notify(&mut self, outcome: Outcome, message: impl Into<String>) {
        self.toast = Some(Toast::new(outcome, message, self.toast_duration));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Time since the TUI started, as "MM:SS" or "H:MM:SS"
    pub fn uptime(&self) -> String {
        let secs = self.started_at.elapsed().as_secs();
        let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        if h > 0 {
            format!("{}:{:02}:{:02}", h, m, s)
        } else {
            format!("{:02}:{:02}", m, s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Board::mount().unwrap(), LogBuffer::new(), &Config::default())
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.type_char(c);
        }
    }

    fn add(app: &mut App, title: &str) {
        app.focus = Focus::Field(FormField::Title);
        type_str(app, title);
        app.focus_next();
        type_str(app, "Something to do");
        app.focus_next();
        type_str(app, "3");
        app.submit();
    }

    #[test]
    fn focus_cycles_through_fields_and_lists() {
        let mut app = app();
        let order = Focus::order();
        assert_eq!(order.len(), 5);

        for expected in order.iter().skip(1) {
            app.focus_next();
            assert_eq!(app.focus, *expected);
        }
        app.focus_next();
        assert_eq!(app.focus, Focus::Field(FormField::Title));

        app.focus_prev();
        assert_eq!(app.focus, Focus::List(ProjectStatus::Finished));
    }

    #[test]
    fn typing_edits_the_document_value() {
        let mut app = app();
        type_str(&mut app, "Shedd");
        app.backspace();
        assert_eq!(app.board.field_value(FormField::Title), "Shed");

        app.focus = Focus::List(ProjectStatus::Active);
        app.type_char('x');
        assert_eq!(app.board.field_value(FormField::Title), "Shed");
    }

    #[test]
    fn valid_submit_adds_card_and_toasts() {
        let mut app = app();
        add(&mut app, "Build shed");

        assert_eq!(app.board.cards(ProjectStatus::Active).len(), 1);
        assert!(app.modal.is_none());
        assert!(app.toast.is_some());
        assert_eq!(app.focus, Focus::Field(FormField::Title));
    }

    #[test]
    fn invalid_submit_opens_alert_modal() {
        let mut app = app();
        type_str(&mut app, "Build shed");
        app.submit();

        assert_eq!(app.modal, Some(Modal::alert("Invalid!")));
        assert!(app.board.store().is_empty());
        assert_eq!(app.board.field_value(FormField::Title), "Build shed");
    }

    #[test]
    fn selection_is_clamped_to_cards() {
        let mut app = app();
        assert_eq!(app.selected_index(ProjectStatus::Active), None);

        add(&mut app, "One");
        add(&mut app, "Two");
        app.focus = Focus::List(ProjectStatus::Active);

        app.select_next();
        app.select_next();
        assert_eq!(app.selected_index(ProjectStatus::Active), Some(1));
        app.select_prev();
        app.select_prev();
        assert_eq!(app.selected_index(ProjectStatus::Active), Some(0));
    }

    #[test]
    fn keyboard_drag_moves_card_and_follows_it() {
        let mut app = app();
        add(&mut app, "One");
        add(&mut app, "Two");
        app.focus = Focus::List(ProjectStatus::Active);
        app.select_next();

        app.pick_up();
        let id = app.drag.as_ref().unwrap().project_id.clone();
        assert!(app.is_dragging(&id));

        app.hover(ProjectStatus::Finished);
        assert!(app.board.is_droppable(ProjectStatus::Finished));
        app.drop_card();

        assert!(app.drag.is_none());
        assert_eq!(app.focus, Focus::List(ProjectStatus::Finished));
        let finished = app.board.cards(ProjectStatus::Finished);
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].title, "Two");
        assert_eq!(app.selected_index(ProjectStatus::Finished), Some(0));
        assert!(!app.board.is_droppable(ProjectStatus::Finished));
    }

    #[test]
    fn drop_without_hover_keeps_card() {
        let mut app = app();
        add(&mut app, "One");
        app.focus = Focus::List(ProjectStatus::Active);

        app.pick_up();
        app.drop_card();

        assert!(app.drag.is_none());
        assert_eq!(app.board.cards(ProjectStatus::Active).len(), 1);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.outcome, Outcome::Failed);
        assert_eq!(toast.message, DROP_REFUSED);
    }

    #[test]
    fn cancel_clears_hover_marker() {
        let mut app = app();
        add(&mut app, "One");
        app.focus = Focus::List(ProjectStatus::Active);

        app.pick_up();
        app.hover(ProjectStatus::Finished);
        app.cancel_drag();

        assert!(app.drag.is_none());
        assert!(!app.board.is_droppable(ProjectStatus::Finished));
        assert_eq!(app.board.cards(ProjectStatus::Active).len(), 1);
    }

    #[test]
    fn board_json_lists_projects() {
        let mut app = app();
        add(&mut app, "One");
        let json = app.board_json().unwrap();
        assert!(json.contains("\"title\": \"One\""));
        assert!(json.contains("\"status\": \"active\""));
    }
}
