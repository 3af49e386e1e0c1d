//! Clipboard copy with backend selection
//!
//! Two backends: the OS clipboard via arboard, and OSC 52 escape sequences
//! for terminals where no system clipboard is reachable (SSH, headless).
//! `Auto` tries the system clipboard first and falls back to OSC 52.

use thiserror::Error;

use crate::config::ClipboardBackend;

mod osc52;
mod system;

/// Errors that can occur during clipboard operations
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard is not available")]
    SystemUnavailable,

    #[error("failed to write to clipboard")]
    WriteFailed,
}

/// Copy text to the clipboard using the configured backend
pub fn copy(text: &str, backend: ClipboardBackend) -> Result<(), ClipboardError> {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            log::debug!("system clipboard unavailable ({}), falling back to OSC 52", e);
            osc52::copy(text)
        }),
    }
}
