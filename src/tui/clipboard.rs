//! Clipboard helper for copying the board dump
//!
//! `arboard` is created fresh on every copy; holding it would keep an X11
//! selection owner thread alive for the whole session.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails when there is no display server (headless Linux) or access is denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(text)
        .context("Failed to set clipboard text")
}
