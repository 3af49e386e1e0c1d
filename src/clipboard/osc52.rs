//! OSC 52 clipboard backend
//!
//! Emits the terminal escape sequence that asks the emulator itself to set
//! the clipboard. Works over SSH and in headless environments where arboard
//! cannot reach a display server.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::ClipboardError;

pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let sequence = encode_osc52(text);

    io::stdout()
        .write_all(sequence.as_bytes())
        .map_err(|_| ClipboardError::WriteFailed)?;

    io::stdout().flush().map_err(|_| ClipboardError::WriteFailed)
}

fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
