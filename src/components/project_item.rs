// Project card - one draggable list entry per project
//
// Cards are rebuilt from scratch every time their list re-renders, so an item
// only ever sees the snapshot it was created with.

use super::{attach_from_template, bind, require, Component, Draggable};
use crate::dom::{Document, DropEffect, Event, EventKind, InsertPosition, NodeId, TEXT_PLAIN};
use crate::model::Project;
use crate::page::ITEM_TEMPLATE;
use anyhow::Result;
use std::rc::{Rc, Weak};

pub struct ProjectItem {
    me: Weak<ProjectItem>,
    doc: Document,
    element: NodeId,
    project: Project,
}

impl ProjectItem {
    /// Create a card for `project` at the end of the list with id `host_id`
    pub fn new(doc: &Document, host_id: &str, project: Project) -> Result<Rc<Self>> {
        let element = attach_from_template(
            doc,
            ITEM_TEMPLATE,
            host_id,
            InsertPosition::BeforeEnd,
            Some(&project.id),
        )?;

        let item = Rc::new_cyclic(|me| Self {
            me: me.clone(),
            doc: doc.clone(),
            element,
            project,
        });

        item.configure()?;
        item.render_content()?;
        Ok(item)
    }
}

impl Component for ProjectItem {
    fn element(&self) -> NodeId {
        self.element
    }

    fn configure(&self) -> Result<()> {
        self.doc.add_event_listener(
            self.element,
            EventKind::DragStart,
            bind(&self.me, Self::on_drag_start),
        );
        self.doc.add_event_listener(
            self.element,
            EventKind::DragEnd,
            bind(&self.me, Self::on_drag_end),
        );
        Ok(())
    }

    fn render_content(&self) -> Result<()> {
        let title = require(&self.doc, self.element, "h2")?;
        let persons = require(&self.doc, self.element, "h3")?;
        let description = require(&self.doc, self.element, "p")?;

        self.doc.set_text(title, &self.project.title);
        self.doc
            .set_text(persons, &format!("{} assigned.", self.project.persons_label()));
        self.doc.set_text(description, &self.project.description);
        Ok(())
    }
}

impl Draggable for ProjectItem {
    fn on_drag_start(&self, event: &mut Event) {
        let data = event.data_transfer.get_or_insert_with(Default::default);
        data.set_data(TEXT_PLAIN, self.project.id.as_str());
        data.effect_allowed = DropEffect::Move;
        tracing::debug!("Drag started: {}", self.project.title);
    }

    fn on_drag_end(&self, _event: &mut Event) {}
}
