//! System clipboard backend (arboard)

use arboard::Clipboard;

use super::ClipboardError;

/// Copy text to the OS clipboard
///
/// Unavailable in headless environments (no display server); the caller
/// falls back to OSC 52 in `Auto` mode.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteFailed)
}
