//! Board components - UI units rendered into the host document
//!
//! Every component owns one element instantiated from a named template and
//! attached to a host container. Attachment is a plain function
//! ([`attach_from_template`]); the per-component behavior lives behind the
//! [`Component`] trait, with drag capabilities as separate traits.
//!
//! # Lifecycle
//!
//! ```text
//! attach_from_template()  →  configure()  →  render_content()
//!   (template + host)        (listeners)      (fill from data)
//! ```
//!
//! Components hold a `Weak` handle to themselves (built with
//! `Rc::new_cyclic`). Event listeners are created once in `configure()` via
//! [`bind`], so a handler fired by the document always resolves to the
//! component that registered it, and a dropped component's handlers go quiet.

mod project_input;
mod project_item;
mod project_list;

pub use project_input::{ProjectInput, FORM_ID};
pub use project_item::ProjectItem;
pub use project_list::{ProjectList, DROPPABLE};

use crate::dom::{Document, Event, InsertPosition, NodeId};
use anyhow::{anyhow, Result};
use std::rc::Weak;

/// Base contract for every board component
pub trait Component {
    /// The element this component owns
    fn element(&self) -> NodeId;

    /// Wire up listeners and subscriptions
    fn configure(&self) -> Result<()>;

    /// Populate the owned element from current data
    fn render_content(&self) -> Result<()>;
}

/// A component that can be picked up and dragged
pub trait Draggable: Component {
    fn on_drag_start(&self, event: &mut Event);
    fn on_drag_end(&self, event: &mut Event);
}

/// A component that accepts drops
pub trait DragTarget: Component {
    fn on_drag_over(&self, event: &mut Event);
    fn on_drop(&self, event: &mut Event);
    fn on_drag_leave(&self, event: &mut Event);
}

/// Instantiate a template and attach its root element to a host
///
/// A missing template or host is a wiring mistake, not something a user can
/// cause, so it comes back as an error for the caller to propagate.
pub fn attach_from_template(
    doc: &Document,
    template_id: &str,
    host_id: &str,
    position: InsertPosition,
    new_element_id: Option<&str>,
) -> Result<NodeId> {
    let host = doc
        .get_element_by_id(host_id)
        .ok_or_else(|| anyhow!("Host element '#{}' not found", host_id))?;
    let element = doc.instantiate_template(template_id)?;

    if let Some(id) = new_element_id {
        doc.set_element_id(element, id);
    }

    doc.insert(host, element, position);
    Ok(element)
}

/// Build an event handler that calls `handler` on the live component
pub fn bind<C: 'static>(
    me: &Weak<C>,
    handler: fn(&C, &mut Event),
) -> impl Fn(&mut Event) + 'static {
    let me = me.clone();
    move |event| {
        if let Some(component) = me.upgrade() {
            handler(&component, event);
        }
    }
}

/// Find a required sub-element of a component
pub(crate) fn require(doc: &Document, root: NodeId, selector: &str) -> Result<NodeId> {
    doc.query_selector(root, selector)
        .ok_or_else(|| anyhow!("Element '{}' missing from component template", selector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Markup;

    fn doc_with_host() -> (Document, NodeId) {
        let doc = Document::new();
        let host = doc.append_markup(doc.body(), &Markup::new("div").id("app"));
        doc.append_markup(host, &Markup::new("p").id("existing"));
        doc.register_template("box", Markup::new("section").child(Markup::new("h2")));
        (doc, host)
    }

    #[test]
    fn attaches_at_requested_position() {
        let (doc, host) = doc_with_host();

        let end =
            attach_from_template(&doc, "box", "app", InsertPosition::BeforeEnd, None).unwrap();
        let start =
            attach_from_template(&doc, "box", "app", InsertPosition::AfterBegin, Some("top"))
                .unwrap();

        let children = doc.children(host);
        assert_eq!(children.first(), Some(&start));
        assert_eq!(children.last(), Some(&end));
        assert_eq!(doc.element_id(start).as_deref(), Some("top"));
        assert_eq!(doc.element_id(end), None);
    }

    #[test]
    fn missing_host_or_template_fails() {
        let (doc, _) = doc_with_host();
        let no_host = attach_from_template(&doc, "box", "nowhere", InsertPosition::BeforeEnd, None);
        assert!(no_host.is_err());
        let no_template =
            attach_from_template(&doc, "nothing", "app", InsertPosition::BeforeEnd, None);
        assert!(no_template.is_err());
    }

    #[test]
    fn bound_handler_stops_after_component_drops() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct Counter {
            hits: Rc<Cell<u32>>,
        }

        let hits = Rc::new(Cell::new(0));
        let counter = Rc::new(Counter { hits: hits.clone() });
        let handler = bind(&Rc::downgrade(&counter), |c: &Counter, _| {
            c.hits.set(c.hits.get() + 1)
        });

        let doc = Document::new();
        let mut event = Event::new(crate::dom::EventKind::Submit, doc.body());
        handler(&mut event);
        drop(counter);
        handler(&mut event);

        assert_eq!(hits.get(), 1);
    }
}
