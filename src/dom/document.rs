// Document tree, templates and event dispatch
//
// Nodes live in a map keyed by a never-reused NodeId, so a handle to a removed
// node simply stops resolving instead of aliasing a newer element. `Document`
// is a cheap shared handle; every method borrows the tree only for its own
// duration, which lets event handlers mutate the document freely.

use super::{Event, EventKind, Markup, Selector};
use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Handle to an element in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Where an element goes when inserted into a host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before the host's first child
    AfterBegin,
    /// After the host's last child
    BeforeEnd,
}

/// Event listener callback
type Handler = Rc<dyn Fn(&mut Event)>;

struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    value: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Default)]
struct Tree {
    nodes: HashMap<NodeId, NodeData>,
    next_id: usize,
    templates: HashMap<String, Markup>,
    listeners: HashMap<NodeId, Vec<(EventKind, Handler)>>,
    alerts: VecDeque<String>,
}

impl Tree {
    fn build(&mut self, markup: &Markup, parent: Option<NodeId>) -> NodeId {
        let node = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            node,
            NodeData {
                tag: markup.tag.to_lowercase(),
                id: markup.id.clone(),
                classes: markup.classes.clone(),
                text: markup.text.clone(),
                value: String::new(),
                parent,
                children: Vec::new(),
            },
        );

        let children: Vec<NodeId> = markup
            .children
            .iter()
            .map(|child| self.build(child, Some(node)))
            .collect();
        if let Some(data) = self.nodes.get_mut(&node) {
            data.children = children;
        }
        node
    }

    /// Depth-first, document order; `root` itself is not considered
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(&root) {
            Some(data) => data.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(data) = self.nodes.get(&node) {
                stack.extend(data.children.iter().rev().copied());
            }
        }
        out
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|d| selector.matches(&d.tag, d.id.as_deref(), &d.classes))
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get_mut(&node).and_then(|d| d.parent.take()) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.retain(|c| *c != node);
        }
    }
}

/// Shared handle to the host document
#[derive(Clone)]
pub struct Document {
    tree: Rc<RefCell<Tree>>,
    body: NodeId,
}

impl Document {
    /// Empty document with a `body` root
    pub fn new() -> Self {
        let mut tree = Tree::default();
        let body = tree.build(&Markup::new("body"), None);
        Self {
            tree: Rc::new(RefCell::new(tree)),
            body,
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    // ─────────────────────────────────────────────────────────────
    // Structure
    // ─────────────────────────────────────────────────────────────

    /// Register (or replace) a named template
    pub fn register_template(&self, template_id: &str, content: Markup) {
        self.tree
            .borrow_mut()
            .templates
            .insert(template_id.to_string(), content);
    }

    /// Build `markup` and append it to `parent`
    pub fn append_markup(&self, parent: NodeId, markup: &Markup) -> NodeId {
        let node = self.tree.borrow_mut().build(markup, None);
        self.insert(parent, node, InsertPosition::BeforeEnd);
        node
    }

    /// Deep copy of a template's root element, not yet attached anywhere
    pub fn instantiate_template(&self, template_id: &str) -> Result<NodeId> {
        let mut tree = self.tree.borrow_mut();
        let content = tree
            .templates
            .get(template_id)
            .cloned()
            .ok_or_else(|| anyhow!("Template '{}' not found", template_id))?;
        Ok(tree.build(&content, None))
    }

    /// Move `node` into `host` at the given position
    pub fn insert(&self, host: NodeId, node: NodeId, position: InsertPosition) {
        let mut tree = self.tree.borrow_mut();
        if !tree.nodes.contains_key(&host) || !tree.nodes.contains_key(&node) {
            return;
        }
        tree.detach(node);
        if let Some(data) = tree.nodes.get_mut(&node) {
            data.parent = Some(host);
        }
        if let Some(host) = tree.nodes.get_mut(&host) {
            match position {
                InsertPosition::AfterBegin => host.children.insert(0, node),
                InsertPosition::BeforeEnd => host.children.push(node),
            }
        }
    }

    /// Destroy every descendant of `node`, including their listeners
    pub fn clear_children(&self, node: NodeId) {
        let mut tree = self.tree.borrow_mut();
        for gone in tree.descendants(node) {
            tree.nodes.remove(&gone);
            tree.listeners.remove(&gone);
        }
        if let Some(data) = tree.nodes.get_mut(&node) {
            data.children.clear();
        }
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree
            .borrow()
            .nodes
            .get(&node)
            .map(|d| d.children.clone())
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.borrow().nodes.get(&node).and_then(|d| d.parent)
    }

    /// Whether the node still exists (attached or detached)
    #[cfg(test)]
    pub fn exists(&self, node: NodeId) -> bool {
        self.tree.borrow().nodes.contains_key(&node)
    }

    /// First attached element with this id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        tree.descendants(self.body)
            .into_iter()
            .find(|n| tree.nodes.get(n).and_then(|d| d.id.as_deref()) == Some(id))
    }

    /// First descendant of `root` matching `selector`
    pub fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector);
        let tree = self.tree.borrow();
        tree.descendants(root)
            .into_iter()
            .find(|n| tree.matches(*n, &selector))
    }

    // ─────────────────────────────────────────────────────────────
    // Element properties
    // ─────────────────────────────────────────────────────────────

    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.tree.borrow().nodes.get(&node).map(|d| d.tag.clone())
    }

    pub fn element_id(&self, node: NodeId) -> Option<String> {
        self.tree.borrow().nodes.get(&node).and_then(|d| d.id.clone())
    }

    pub fn set_element_id(&self, node: NodeId, id: &str) {
        if let Some(data) = self.tree.borrow_mut().nodes.get_mut(&node) {
            data.id = Some(id.to_string());
        }
    }

    pub fn text(&self, node: NodeId) -> String {
        self.tree
            .borrow()
            .nodes
            .get(&node)
            .map(|d| d.text.clone())
            .unwrap_or_default()
    }

    pub fn set_text(&self, node: NodeId, text: &str) {
        if let Some(data) = self.tree.borrow_mut().nodes.get_mut(&node) {
            data.text = text.to_string();
        }
    }

    /// Current value of a form control
    pub fn value(&self, node: NodeId) -> String {
        self.tree
            .borrow()
            .nodes
            .get(&node)
            .map(|d| d.value.clone())
            .unwrap_or_default()
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        if let Some(data) = self.tree.borrow_mut().nodes.get_mut(&node) {
            data.value = value.to_string();
        }
    }

    pub fn add_class(&self, node: NodeId, class: &str) {
        if let Some(data) = self.tree.borrow_mut().nodes.get_mut(&node) {
            if !data.classes.iter().any(|c| c == class) {
                data.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&self, node: NodeId, class: &str) {
        if let Some(data) = self.tree.borrow_mut().nodes.get_mut(&node) {
            data.classes.retain(|c| c != class);
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree
            .borrow()
            .nodes
            .get(&node)
            .is_some_and(|d| d.classes.iter().any(|c| c == class))
    }

    // ─────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────

    pub fn add_event_listener(
        &self,
        node: NodeId,
        kind: EventKind,
        handler: impl Fn(&mut Event) + 'static,
    ) {
        let mut tree = self.tree.borrow_mut();
        if !tree.nodes.contains_key(&node) {
            return;
        }
        tree.listeners
            .entry(node)
            .or_default()
            .push((kind, Rc::new(handler)));
    }

    /// Number of listeners on `node` for `kind`
    #[cfg(test)]
    pub fn listener_count(&self, node: NodeId, kind: EventKind) -> usize {
        self.tree
            .borrow()
            .listeners
            .get(&node)
            .map(|l| l.iter().filter(|(k, _)| *k == kind).count())
            .unwrap_or(0)
    }

    /// Deliver `event` to its target, then to each ancestor
    ///
    /// The propagation path and handlers are collected up front, so changes
    /// handlers make to the tree don't affect who receives this event.
    /// Returns the event so the caller can inspect `default_prevented` and
    /// the payload.
    pub fn dispatch(&self, mut event: Event) -> Event {
        let handlers: Vec<Handler> = {
            let tree = self.tree.borrow();
            let mut path = Vec::new();
            let mut cursor = tree.nodes.get(&event.target).map(|_| event.target);
            while let Some(node) = cursor {
                path.push(node);
                cursor = tree.nodes.get(&node).and_then(|d| d.parent);
            }
            path.iter()
                .filter_map(|n| tree.listeners.get(n))
                .flat_map(|l| l.iter())
                .filter(|(k, _)| *k == event.kind)
                .map(|(_, h)| h.clone())
                .collect()
        };

        tracing::trace!(
            "Dispatching {} to {} handler(s)",
            event.kind.name(),
            handlers.len()
        );

        for handler in handlers {
            handler(&mut event);
        }
        event
    }

    // ─────────────────────────────────────────────────────────────
    // Alerts
    // ─────────────────────────────────────────────────────────────

    /// Raise a blocking alert for the front-end to show
    pub fn alert(&self, message: &str) {
        tracing::warn!("Alert: {}", message);
        self.tree
            .borrow_mut()
            .alerts
            .push_back(message.to_string());
    }

    /// Oldest undisplayed alert
    pub fn take_alert(&self) -> Option<String> {
        self.tree.borrow_mut().alerts.pop_front()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn card_template() -> Markup {
        Markup::new("li")
            .child(Markup::new("h2"))
            .child(Markup::new("h3"))
            .child(Markup::new("p"))
    }

    #[test]
    fn template_instances_are_detached_copies() {
        let doc = Document::new();
        doc.register_template("card", card_template());

        let a = doc.instantiate_template("card").unwrap();
        let b = doc.instantiate_template("card").unwrap();

        assert_ne!(a, b);
        assert_eq!(doc.parent(a), None);
        assert_eq!(doc.tag(a).as_deref(), Some("li"));
        doc.set_text(doc.query_selector(a, "h2").unwrap(), "A");
        assert_eq!(doc.text(doc.query_selector(b, "h2").unwrap()), "");
    }

    #[test]
    fn missing_template_is_an_error() {
        let doc = Document::new();
        let err = doc.instantiate_template("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn insert_positions() {
        let doc = Document::new();
        let host = doc.append_markup(doc.body(), &Markup::new("div").id("app"));
        let first = doc.append_markup(host, &Markup::new("section").id("first"));
        let start = doc.append_markup(doc.body(), &Markup::new("form").id("start"));

        doc.insert(host, start, InsertPosition::AfterBegin);

        assert_eq!(doc.children(host), vec![start, first]);
        // Moving a node detaches it from its previous parent
        assert!(!doc.children(doc.body()).contains(&start));
    }

    #[test]
    fn lookup_by_id_only_sees_attached_nodes() {
        let doc = Document::new();
        doc.register_template("t", Markup::new("div").id("floating"));
        let node = doc.instantiate_template("t").unwrap();

        assert_eq!(doc.get_element_by_id("floating"), None);
        doc.insert(doc.body(), node, InsertPosition::BeforeEnd);
        assert_eq!(doc.get_element_by_id("floating"), Some(node));
    }

    #[test]
    fn clear_children_drops_nodes_and_listeners() {
        let doc = Document::new();
        let list = doc.append_markup(doc.body(), &Markup::new("ul"));
        let item = doc.append_markup(list, &card_template());
        let title = doc.query_selector(item, "h2").unwrap();
        doc.add_event_listener(item, EventKind::DragStart, |_| {});

        doc.clear_children(list);

        assert!(doc.children(list).is_empty());
        assert!(!doc.exists(item));
        assert!(!doc.exists(title));
        assert_eq!(doc.listener_count(item, EventKind::DragStart), 0);
    }

    #[test]
    fn dispatch_bubbles_to_ancestors() {
        let doc = Document::new();
        let section = doc.append_markup(doc.body(), &Markup::new("section"));
        let list = doc.append_markup(section, &Markup::new("ul"));
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        doc.add_event_listener(section, EventKind::Drop, move |e| {
            counter.set(counter.get() + 1);
            e.prevent_default();
        });
        let counter = hits.clone();
        doc.add_event_listener(list, EventKind::DragOver, move |_| {
            counter.set(counter.get() + 100);
        });

        let event = doc.dispatch(Event::new(EventKind::Drop, list));

        assert_eq!(hits.get(), 1);
        assert!(event.default_prevented());
    }

    #[test]
    fn handlers_may_mutate_the_document() {
        let doc = Document::new();
        let list = doc.append_markup(doc.body(), &Markup::new("ul"));
        let handle = doc.clone();
        doc.add_event_listener(list, EventKind::DragOver, move |e| {
            handle.add_class(e.target, "droppable");
            handle.append_markup(e.target, &Markup::new("li"));
        });

        doc.dispatch(Event::new(EventKind::DragOver, list));

        assert!(doc.has_class(list, "droppable"));
        assert_eq!(doc.children(list).len(), 1);
    }

    #[test]
    fn dispatch_to_removed_node_is_a_no_op() {
        let doc = Document::new();
        let list = doc.append_markup(doc.body(), &Markup::new("ul"));
        let item = doc.append_markup(list, &Markup::new("li"));
        doc.clear_children(list);

        let event = doc.dispatch(Event::new(EventKind::DragEnd, item));
        assert!(!event.default_prevented());
    }

    #[test]
    fn classes_are_a_set() {
        let doc = Document::new();
        let node = doc.append_markup(doc.body(), &Markup::new("ul"));
        doc.add_class(node, "droppable");
        doc.add_class(node, "droppable");
        doc.remove_class(node, "droppable");
        assert!(!doc.has_class(node, "droppable"));
    }

    #[test]
    fn alerts_queue_in_order() {
        let doc = Document::new();
        doc.alert("first");
        doc.alert("second");
        assert_eq!(doc.take_alert().as_deref(), Some("first"));
        assert_eq!(doc.take_alert().as_deref(), Some("second"));
        assert_eq!(doc.take_alert(), None);
    }
}
