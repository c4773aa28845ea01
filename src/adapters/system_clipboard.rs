//! System clipboard adapter backed by `arboard`.

use crate::traits::{ClipboardError, ClipboardProvider};

/// Writes to the OS clipboard (NSPasteboard on macOS, X11/Wayland on Linux).
///
/// A fresh `arboard::Clipboard` is opened per write.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
