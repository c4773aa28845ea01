//! Clipboard trait abstraction.
//!
//! The result panel's copy action writes through this trait. Production code
//! uses the system clipboard via `arboard`; tests use an in-memory double.

use thiserror::Error;

/// Errors from clipboard access.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClipboardError {
    /// The system clipboard could not be opened
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard rejected the write
    #[error("{0}")]
    WriteFailed(String),
}

/// Write access to a clipboard.
pub trait ClipboardProvider: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}
