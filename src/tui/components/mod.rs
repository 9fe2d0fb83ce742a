// Components module - reusable UI building blocks
//
// Shell components rendered around the board:
// - Title bar: App name and drag indicator
// - Status bar: Uptime, project counts, key hints
// - Logs panel: System log entries
// - Toast: Transient notifications

pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::{Outcome, Toast};
