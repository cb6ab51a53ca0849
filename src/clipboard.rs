//! Text clipboard seam.
//!
//! `paste` reads from here and the `-c` destination writes to here. The trait
//! exists so producers can be tested without a windowing system; the real
//! implementation opens an `arboard` handle per call.

use crate::error::ProducerError;

/// Read/write access to the system text clipboard.
pub trait ClipboardAccess: Send + Sync {
    /// Current clipboard text; empty when the clipboard holds no text.
    fn read_text(&self) -> Result<String, ProducerError>;

    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> Result<(), ProducerError>;
}

/// The OS clipboard via `arboard`.
pub struct SystemClipboard;

impl ClipboardAccess for SystemClipboard {
    fn read_text(&self) -> Result<String, ProducerError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ProducerError::ClipboardUnavailable(e.to_string()))?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            // An empty clipboard is valid paste input, not a failure.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ProducerError::ClipboardUnavailable(e.to_string())),
        }
    }

    fn write_text(&self, text: &str) -> Result<(), ProducerError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ProducerError::ClipboardUnavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ProducerError::ClipboardUnavailable(e.to_string()))
    }
}
