// Application state - the shared project store
//
// One store is created per session by the mount step and handed to every
// component that needs it. There is no global accessor.

mod store;

pub use store::ProjectStore;
