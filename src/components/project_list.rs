// Project list - one status column and drop target
//
// The list subscribes to the store and keeps only the projects whose status
// matches its own. Every notification clears the `ul` and rebuilds one card
// per project: no diffing, so per-card UI state never survives a change.

use super::{attach_from_template, bind, require, Component, DragTarget, ProjectItem};
use crate::dom::{Document, Event, EventKind, InsertPosition, NodeId, TEXT_PLAIN};
use crate::model::{Project, ProjectStatus};
use crate::page::{APP_HOST, LIST_TEMPLATE};
use crate::state::ProjectStore;
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Class added to the `ul` while an acceptable payload hovers over it
pub const DROPPABLE: &str = "droppable";

pub struct ProjectList {
    me: Weak<ProjectList>,
    doc: Document,
    store: Rc<ProjectStore>,
    status: ProjectStatus,
    element: NodeId,
    list: NodeId,
    assigned: RefCell<Vec<Project>>,
    items: RefCell<Vec<Rc<ProjectItem>>>,
}

impl ProjectList {
    pub fn new(doc: &Document, store: Rc<ProjectStore>, status: ProjectStatus) -> Result<Rc<Self>> {
        let element = attach_from_template(
            doc,
            LIST_TEMPLATE,
            APP_HOST,
            InsertPosition::BeforeEnd,
            Some(&format!("{}-projects", status)),
        )?;
        let list = require(doc, element, "ul")?;

        let project_list = Rc::new_cyclic(|me| Self {
            me: me.clone(),
            doc: doc.clone(),
            store,
            status,
            element,
            list,
            assigned: RefCell::new(Vec::new()),
            items: RefCell::new(Vec::new()),
        });

        project_list.configure()?;
        project_list.render_content()?;
        Ok(project_list)
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Element id of the inner `ul`
    pub fn list_id(&self) -> String {
        format!("{}-project-list", self.status)
    }

    /// The `ul` cards are rendered into
    pub fn list_element(&self) -> NodeId {
        self.list
    }

    /// Projects currently shown, in store order
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    fn on_projects_changed(&self, projects: Vec<Project>) {
        let filtered: Vec<Project> = projects
            .into_iter()
            .filter(|p| p.status == self.status)
            .collect();
        *self.assigned.borrow_mut() = filtered;

        if let Err(e) = self.render_projects() {
            tracing::error!("Failed to render {} projects: {:#}", self.status, e);
        }
    }

    fn render_projects(&self) -> Result<()> {
        let list_id = self.list_id();
        let list = self
            .doc
            .get_element_by_id(&list_id)
            .with_context(|| format!("List '#{}' is not attached", list_id))?;

        self.doc.clear_children(list);
        let mut items = self.items.borrow_mut();
        items.clear();

        for project in self.assigned.borrow().iter() {
            items.push(ProjectItem::new(&self.doc, &list_id, project.clone())?);
        }

        tracing::debug!("Rendered {} {} project(s)", items.len(), self.status);
        Ok(())
    }
}

impl Component for ProjectList {
    fn element(&self) -> NodeId {
        self.element
    }

    fn configure(&self) -> Result<()> {
        self.doc.add_event_listener(
            self.element,
            EventKind::DragOver,
            bind(&self.me, Self::on_drag_over),
        );
        self.doc
            .add_event_listener(self.element, EventKind::Drop, bind(&self.me, Self::on_drop));
        self.doc.add_event_listener(
            self.element,
            EventKind::DragLeave,
            bind(&self.me, Self::on_drag_leave),
        );

        let me = self.me.clone();
        self.store.add_listener(move |projects| {
            if let Some(list) = me.upgrade() {
                list.on_projects_changed(projects);
            }
        });
        Ok(())
    }

    fn render_content(&self) -> Result<()> {
        self.doc.set_element_id(self.list, &self.list_id());
        let heading = require(&self.doc, self.element, "h2")?;
        self.doc.set_text(
            heading,
            &format!("{} PROJECTS", self.status.as_str().to_uppercase()),
        );
        Ok(())
    }
}

impl DragTarget for ProjectList {
    fn on_drag_over(&self, event: &mut Event) {
        let plain_text = event
            .data_transfer
            .as_ref()
            .and_then(|data| data.types().first().map(|t| *t == TEXT_PLAIN))
            .unwrap_or(false);

        if plain_text {
            event.prevent_default();
            self.doc.add_class(self.list, DROPPABLE);
        }
    }

    fn on_drop(&self, event: &mut Event) {
        let project_id = event
            .data_transfer
            .as_ref()
            .map(|data| data.get_data(TEXT_PLAIN))
            .unwrap_or_default();

        self.store.move_project(&project_id, self.status);
        self.doc.remove_class(self.list, DROPPABLE);
    }

    fn on_drag_leave(&self, _event: &mut Event) {
        self.doc.remove_class(self.list, DROPPABLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::DataTransfer;

    struct Fixture {
        doc: Document,
        store: Rc<ProjectStore>,
        active: Rc<ProjectList>,
        finished: Rc<ProjectList>,
    }

    fn fixture() -> Fixture {
        let doc = Document::new();
        crate::page::build(&doc);
        let store = Rc::new(ProjectStore::new());
        let active = ProjectList::new(&doc, store.clone(), ProjectStatus::Active).unwrap();
        let finished = ProjectList::new(&doc, store.clone(), ProjectStatus::Finished).unwrap();
        Fixture {
            doc,
            store,
            active,
            finished,
        }
    }

    fn card_titles(doc: &Document, list: &ProjectList) -> Vec<String> {
        doc.children(list.list_element())
            .into_iter()
            .map(|li| doc.text(doc.query_selector(li, "h2").unwrap()))
            .collect()
    }

    fn plain_payload(id: &str) -> DataTransfer {
        let mut data = DataTransfer::new();
        data.set_data(TEXT_PLAIN, id);
        data
    }

    #[test]
    fn renders_heading_and_list_id() {
        let f = fixture();
        let section = f.doc.get_element_by_id("finished-projects").unwrap();
        assert_eq!(section, f.finished.element());

        let h2 = f.doc.query_selector(section, "h2").unwrap();
        assert_eq!(f.doc.text(h2), "FINISHED PROJECTS");
        assert_eq!(
            f.doc.get_element_by_id("finished-project-list"),
            Some(f.finished.list_element())
        );
        assert_eq!(
            f.doc.text(f.doc.query_selector(f.active.element(), "h2").unwrap()),
            "ACTIVE PROJECTS"
        );
    }

    #[test]
    fn lists_attach_after_existing_content() {
        let f = fixture();
        let app = f.doc.get_element_by_id("app").unwrap();
        assert_eq!(
            f.doc.children(app),
            vec![f.active.element(), f.finished.element()]
        );
    }

    #[test]
    fn add_shows_card_in_active_only() {
        let f = fixture();
        f.store.add_project("Build shed", "A small shed", 3);

        assert_eq!(card_titles(&f.doc, &f.active), vec!["Build shed"]);
        assert!(card_titles(&f.doc, &f.finished).is_empty());

        let li = f.doc.children(f.active.list_element())[0];
        assert_eq!(
            f.doc.text(f.doc.query_selector(li, "h3").unwrap()),
            "3 persons assigned."
        );
        assert_eq!(f.doc.text(f.doc.query_selector(li, "p").unwrap()), "A small shed");
    }

    #[test]
    fn visible_set_matches_filter_in_insertion_order() {
        let f = fixture();
        let a = f.store.add_project("A", "First project", 3);
        f.store.add_project("B", "Second project", 3);
        let c = f.store.add_project("C", "Third project", 3);
        f.store.add_project("D", "Fourth project", 3);
        f.store.move_project(&c, ProjectStatus::Finished);
        f.store.move_project(&a, ProjectStatus::Finished);

        assert_eq!(card_titles(&f.doc, &f.active), vec!["B", "D"]);
        assert_eq!(card_titles(&f.doc, &f.finished), vec!["A", "C"]);
        let assigned: Vec<String> = f
            .finished
            .assigned_projects()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(assigned, vec!["A", "C"]);
    }

    #[test]
    fn rerender_replaces_cards() {
        let f = fixture();
        let id = f.store.add_project("Build shed", "A small shed", 3);
        let before = f.doc.children(f.active.list_element());

        f.store.move_project(&id, ProjectStatus::Active);

        let after = f.doc.children(f.active.list_element());
        assert_eq!(after.len(), 1);
        assert_ne!(before, after);
        assert!(!f.doc.exists(before[0]));
    }

    #[test]
    fn drag_over_marks_only_plain_text() {
        let f = fixture();
        let ul = f.finished.list_element();

        let mut html = DataTransfer::new();
        html.set_data("text/html", "<b>x</b>");
        html.set_data(TEXT_PLAIN, "x");
        let ignored = f.doc.dispatch(Event::drag(EventKind::DragOver, ul, html));
        assert!(!ignored.default_prevented());
        assert!(!f.doc.has_class(ul, DROPPABLE));

        let accepted = f
            .doc
            .dispatch(Event::drag(EventKind::DragOver, ul, plain_payload("x")));
        assert!(accepted.default_prevented());
        assert!(f.doc.has_class(ul, DROPPABLE));

        f.doc.dispatch(Event::new(EventKind::DragLeave, ul));
        assert!(!f.doc.has_class(ul, DROPPABLE));
    }

    #[test]
    fn drag_over_without_payload_is_ignored() {
        let f = fixture();
        let ul = f.active.list_element();
        let event = f.doc.dispatch(Event::new(EventKind::DragOver, ul));
        assert!(!event.default_prevented());
        assert!(!f.doc.has_class(ul, DROPPABLE));
    }

    #[test]
    fn drop_moves_project_and_clears_marker() {
        let f = fixture();
        let id = f.store.add_project("Build shed", "A small shed", 3);
        let ul = f.finished.list_element();
        f.doc
            .dispatch(Event::drag(EventKind::DragOver, ul, plain_payload(&id)));

        f.doc
            .dispatch(Event::drag(EventKind::Drop, ul, plain_payload(&id)));

        assert!(!f.doc.has_class(ul, DROPPABLE));
        assert!(card_titles(&f.doc, &f.active).is_empty());
        assert_eq!(card_titles(&f.doc, &f.finished), vec!["Build shed"]);
        let li = f.doc.children(ul)[0];
        assert_eq!(
            f.doc.text(f.doc.query_selector(li, "h3").unwrap()),
            "3 persons assigned."
        );
        assert_eq!(f.store.dump_projects()[0].status, ProjectStatus::Finished);
    }

    #[test]
    fn drop_of_unknown_id_still_redraws() {
        let f = fixture();
        f.store.add_project("Build shed", "A small shed", 3);
        let before = f.doc.children(f.active.list_element());

        let ul = f.finished.list_element();
        f.doc
            .dispatch(Event::drag(EventKind::Drop, ul, plain_payload("ghost")));

        let after = f.doc.children(f.active.list_element());
        assert_eq!(after.len(), 1);
        assert_ne!(before, after);
        assert_eq!(f.store.dump_projects()[0].status, ProjectStatus::Active);
    }
}
