// Domain model - the records the board is built from
//
// Projects are plain data. Only the store creates and mutates them;
// everything else works on cloned snapshots.

mod project;

pub use project::{Project, ProjectStatus};
