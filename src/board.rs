// Board - the mounted page plus user-level actions on it
//
// `Board::mount` builds the page, creates the one store for the session and
// constructs the form and both lists, injecting the store into each. The
// front-ends (TUI, headless) never call the store's write operations
// directly; they fill form controls, submit, and run drag sequences through
// the document, exactly as a user in a browser would.

use crate::components::{Component, ProjectInput, ProjectList, DROPPABLE, FORM_ID};
use crate::dom::{DataTransfer, Document, Event, EventKind, NodeId};
use crate::model::ProjectStatus;
use crate::page::{self, DESCRIPTION_INPUT, PEOPLE_INPUT, TITLE_INPUT};
use crate::state::ProjectStore;
use anyhow::{Context, Result};
use std::rc::Rc;

/// One of the three form controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[FormField::Title, FormField::Description, FormField::People]
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            FormField::Title => TITLE_INPUT,
            FormField::Description => DESCRIPTION_INPUT,
            FormField::People => PEOPLE_INPUT,
        }
    }
}

/// A rendered card, read back from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub persons: String,
    pub description: String,
}

/// An in-progress drag, from drag-start until drop or cancel
#[derive(Debug, Clone)]
pub struct DragSession {
    source: NodeId,
    data: DataTransfer,
    over: Option<ProjectStatus>,
    accepted: bool,
    pub project_id: String,
}

impl DragSession {
    /// List currently hovered, if any
    pub fn over(&self) -> Option<ProjectStatus> {
        self.over
    }

    /// Whether the hovered list agreed to take the drop
    #[cfg(test)]
    pub fn accepted(&self) -> bool {
        self.accepted
    }
}

/// The mounted page and the components living on it
pub struct Board {
    doc: Document,
    store: Rc<ProjectStore>,
    // Kept alive so their bound listeners keep resolving
    _input: Rc<ProjectInput>,
    lists: Vec<Rc<ProjectList>>,
}

impl Board {
    /// Build the page and mount the form and both lists
    pub fn mount() -> Result<Self> {
        let doc = Document::new();
        page::build(&doc);

        let store = Rc::new(ProjectStore::new());
        let input = ProjectInput::new(&doc, store.clone()).context("Failed to mount project form")?;
        let lists = ProjectStatus::all()
            .iter()
            .map(|status| {
                ProjectList::new(&doc, store.clone(), *status)
                    .with_context(|| format!("Failed to mount {} list", status))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Board mounted with {} lists", lists.len());

        Ok(Self {
            doc,
            store,
            _input: input,
            lists,
        })
    }

    #[cfg(test)]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    fn list(&self, status: ProjectStatus) -> Option<&Rc<ProjectList>> {
        self.lists.iter().find(|l| l.status() == status)
    }

    // ─────────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────────

    fn field_element(&self, field: FormField) -> Result<NodeId> {
        self.doc
            .get_element_by_id(field.element_id())
            .with_context(|| format!("Form control '#{}' not found", field.element_id()))
    }

    pub fn field_value(&self, field: FormField) -> String {
        self.field_element(field)
            .map(|node| self.doc.value(node))
            .unwrap_or_default()
    }

    pub fn set_field_value(&self, field: FormField, value: &str) -> Result<()> {
        let node = self.field_element(field)?;
        self.doc.set_value(node, value);
        Ok(())
    }

    /// Fill all three controls
    pub fn fill_form(&self, title: &str, description: &str, people: &str) -> Result<()> {
        self.set_field_value(FormField::Title, title)?;
        self.set_field_value(FormField::Description, description)?;
        self.set_field_value(FormField::People, people)
    }

    /// Dispatch a submit on the form
    pub fn submit_form(&self) -> Result<()> {
        let form = self
            .doc
            .get_element_by_id(FORM_ID)
            .context("Project form not found")?;
        self.doc.dispatch(Event::new(EventKind::Submit, form));
        Ok(())
    }

    /// Oldest alert the user hasn't seen yet
    pub fn take_alert(&self) -> Option<String> {
        self.doc.take_alert()
    }

    // ─────────────────────────────────────────────────────────────
    // Lists
    // ─────────────────────────────────────────────────────────────

    /// Heading text of a list
    pub fn heading(&self, status: ProjectStatus) -> String {
        self.list(status)
            .and_then(|l| self.doc.query_selector(l.element(), "h2"))
            .map(|h2| self.doc.text(h2))
            .unwrap_or_default()
    }

    /// Cards currently rendered in a list, in display order
    pub fn cards(&self, status: ProjectStatus) -> Vec<CardView> {
        let Some(list) = self.list(status) else {
            return Vec::new();
        };
        self.doc
            .children(list.list_element())
            .into_iter()
            .map(|li| {
                let text = |sel: &str| {
                    self.doc
                        .query_selector(li, sel)
                        .map(|n| self.doc.text(n))
                        .unwrap_or_default()
                };
                CardView {
                    id: self.doc.element_id(li).unwrap_or_default(),
                    title: text("h2"),
                    persons: text("h3"),
                    description: text("p"),
                }
            })
            .collect()
    }

    /// Projects a list holds after its last store notification
    pub fn project_count(&self, status: ProjectStatus) -> usize {
        self.list(status)
            .map_or(0, |l| l.assigned_projects().len())
    }

    /// Whether a list is showing the drop marker
    pub fn is_droppable(&self, status: ProjectStatus) -> bool {
        self.list(status)
            .is_some_and(|l| self.doc.has_class(l.list_element(), DROPPABLE))
    }

    // ─────────────────────────────────────────────────────────────
    // Drag and drop
    // ─────────────────────────────────────────────────────────────

    /// Pick up the card with this project id
    pub fn start_drag(&self, project_id: &str) -> Option<DragSession> {
        let source = self.doc.get_element_by_id(project_id)?;
        let event = self.doc.dispatch(Event::drag(
            EventKind::DragStart,
            source,
            DataTransfer::new(),
        ));
        Some(DragSession {
            source,
            data: event.data_transfer.unwrap_or_default(),
            over: None,
            accepted: false,
            project_id: project_id.to_string(),
        })
    }

    /// Move the drag over a list, leaving the previous one
    pub fn drag_over(&self, session: &mut DragSession, status: ProjectStatus) {
        if let Some(previous) = session.over.filter(|s| *s != status) {
            self.dispatch_to_list(previous, Event::new(EventKind::DragLeave, self.body()));
        }
        let event = self.dispatch_to_list(
            status,
            Event::drag(EventKind::DragOver, self.body(), session.data.clone()),
        );
        session.accepted = event.is_some_and(|e| e.default_prevented());
        session.over = Some(status);
    }

    /// Release the card; returns true if a list accepted the drop
    pub fn drop_drag(&self, session: DragSession) -> bool {
        let dropped = match session.over {
            Some(status) if session.accepted => {
                self.dispatch_to_list(
                    status,
                    Event::drag(EventKind::Drop, self.body(), session.data.clone()),
                );
                true
            }
            Some(status) => {
                self.dispatch_to_list(status, Event::new(EventKind::DragLeave, self.body()));
                false
            }
            None => false,
        };
        self.end_drag(&session);
        dropped
    }

    /// Abandon the drag without dropping
    pub fn cancel_drag(&self, session: DragSession) {
        if let Some(status) = session.over {
            self.dispatch_to_list(status, Event::new(EventKind::DragLeave, self.body()));
        }
        self.end_drag(&session);
    }

    /// Full drag sequence from a card to a list
    pub fn drag_project(&self, project_id: &str, to: ProjectStatus) -> bool {
        let Some(mut session) = self.start_drag(project_id) else {
            return false;
        };
        self.drag_over(&mut session, to);
        self.drop_drag(session)
    }

    fn end_drag(&self, session: &DragSession) {
        // The source card may already be gone after a re-render
        self.doc.dispatch(Event::drag(
            EventKind::DragEnd,
            session.source,
            session.data.clone(),
        ));
    }

    fn body(&self) -> NodeId {
        self.doc.body()
    }

    /// Retarget `event` at a list's `ul` and dispatch it
    fn dispatch_to_list(&self, status: ProjectStatus, mut event: Event) -> Option<Event> {
        let list = self.list(status)?;
        event.target = list.list_element();
        Some(self.doc.dispatch(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(title: &str) -> (Board, String) {
        let board = Board::mount().unwrap();
        board.fill_form(title, "A small shed", "3").unwrap();
        board.submit_form().unwrap();
        let id = board.store().dump_projects()[0].id.clone();
        (board, id)
    }

    #[test]
    fn project_count_follows_moves() {
        let (board, id) = board_with("Build shed");
        board.fill_form("Paint fence", "Two coats", "4").unwrap();
        board.submit_form().unwrap();
        assert_eq!(board.project_count(ProjectStatus::Active), 2);

        assert!(board.drag_project(&id, ProjectStatus::Finished));

        assert_eq!(board.project_count(ProjectStatus::Active), 1);
        assert_eq!(board.project_count(ProjectStatus::Finished), 1);
    }

    #[test]
    fn mount_builds_form_and_both_lists() {
        let board = Board::mount().unwrap();
        let doc = board.document();
        let app = doc.get_element_by_id("app").unwrap();
        let ids: Vec<String> = doc
            .children(app)
            .into_iter()
            .filter_map(|n| doc.element_id(n))
            .collect();
        assert_eq!(ids, vec!["user-input", "active-projects", "finished-projects"]);
        assert_eq!(board.heading(ProjectStatus::Active), "ACTIVE PROJECTS");
        assert_eq!(board.heading(ProjectStatus::Finished), "FINISHED PROJECTS");
    }

    #[test]
    fn build_shed_scenario() {
        let (board, id) = board_with("Build shed");

        assert_eq!(board.store().len(), 1);
        assert_eq!(
            board.cards(ProjectStatus::Active),
            vec![CardView {
                id: id.clone(),
                title: "Build shed".to_string(),
                persons: "3 persons assigned.".to_string(),
                description: "A small shed".to_string(),
            }]
        );
        assert!(board.cards(ProjectStatus::Finished).is_empty());

        let card = board.cards(ProjectStatus::Active).remove(0);
        assert!(board.drag_project(&id, ProjectStatus::Finished));

        assert!(board.cards(ProjectStatus::Active).is_empty());
        assert_eq!(board.cards(ProjectStatus::Finished), vec![card]);
    }

    #[test]
    fn invalid_submit_scenario() {
        let board = Board::mount().unwrap();
        board.fill_form("Build shed", "hi", "3").unwrap();

        board.submit_form().unwrap();

        assert_eq!(board.take_alert().as_deref(), Some("Invalid!"));
        assert!(board.store().is_empty());
        assert_eq!(board.field_value(FormField::Description), "hi");
        assert_eq!(board.field_value(FormField::Title), "Build shed");
        assert_eq!(board.field_value(FormField::People), "3");
    }

    #[test]
    fn hover_marks_target_and_leave_clears_it() {
        let (board, id) = board_with("Build shed");
        let mut session = board.start_drag(&id).unwrap();
        assert_eq!(session.project_id, id);

        board.drag_over(&mut session, ProjectStatus::Finished);
        assert!(session.accepted());
        assert!(board.is_droppable(ProjectStatus::Finished));

        board.drag_over(&mut session, ProjectStatus::Active);
        assert!(!board.is_droppable(ProjectStatus::Finished));
        assert!(board.is_droppable(ProjectStatus::Active));
        assert_eq!(session.over(), Some(ProjectStatus::Active));

        board.cancel_drag(session);
        assert!(!board.is_droppable(ProjectStatus::Active));
        assert_eq!(board.cards(ProjectStatus::Active).len(), 1);
    }

    #[test]
    fn dropping_on_own_list_redraws_without_change() {
        let (board, id) = board_with("Build shed");
        let before = board.cards(ProjectStatus::Active);

        assert!(board.drag_project(&id, ProjectStatus::Active));

        assert_eq!(board.cards(ProjectStatus::Active), before);
        assert!(!board.is_droppable(ProjectStatus::Active));
    }

    #[test]
    fn drop_without_hover_does_nothing() {
        let (board, id) = board_with("Build shed");
        let session = board.start_drag(&id).unwrap();
        assert!(!board.drop_drag(session));
        assert_eq!(board.cards(ProjectStatus::Active).len(), 1);
    }

    #[test]
    fn unknown_card_cannot_be_dragged() {
        let board = Board::mount().unwrap();
        assert!(board.start_drag("missing").is_none());
        assert!(!board.drag_project("missing", ProjectStatus::Finished));
    }
}
