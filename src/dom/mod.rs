// Host document - an in-memory element tree the components render into
//
// This is the board's stand-in for a browser DOM. It provides exactly what
// the components need:
// - Named templates that can be instantiated as detached element trees
// - Lookup by element id and by simple selectors
// - Class lists, text content and form values
// - Event listeners with bubbling dispatch (submit and drag events)
// - A queue of blocking alerts for the front-end to display
//
// The terminal UI reads the tree to draw the board and turns keystrokes into
// events, so every user action flows through the same listeners a browser
// would call.

mod document;
mod event;
mod markup;
mod selector;

pub use document::{Document, InsertPosition, NodeId};
pub use event::{DataTransfer, DropEffect, Event, EventKind};
pub use markup::Markup;
pub use selector::Selector;

/// MIME type used for project ids in drag payloads
pub const TEXT_PLAIN: &str = "text/plain";
