//! Clipboard backends
//!
//! Two ways onto the clipboard: the OS clipboard via arboard, and OSC 52
//! escape sequences written to stdout for terminals over SSH or without a
//! display server. `Auto` tries the system clipboard and falls back.

use std::io::{self, Write};

use arboard::Clipboard;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

use crate::config::ClipboardBackend;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("System clipboard is not available")]
    SystemUnavailable,
    #[error("Failed to write to clipboard")]
    WriteError,
}

/// Copy text to the clipboard using the configured backend
///
/// - `System` uses only the OS clipboard API
/// - `Osc52` uses only OSC 52 escape sequences
/// - `Auto` tries the system clipboard first, then falls back to OSC 52
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> Result<(), ClipboardError> {
    match backend {
        ClipboardBackend::System => copy_system(text),
        ClipboardBackend::Osc52 => copy_osc52(text),
        ClipboardBackend::Auto => copy_system(text).or_else(|_| copy_osc52(text)),
    }
}

fn copy_system(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;
    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}

fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
    let sequence = encode_osc52(text);

    io::stdout()
        .write_all(sequence.as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    io::stdout().flush().map_err(|_| ClipboardError::WriteError)
}

/// OSC 52 escape sequence carrying base64-encoded text
pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{encoded}\x07")
}

#[cfg(test)]
#[path = "clipboard_tests.rs"]
mod clipboard_tests;
