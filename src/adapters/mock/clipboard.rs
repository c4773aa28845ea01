//! In-memory clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{ClipboardError, ClipboardProvider};

/// Clipboard double that records every write.
///
/// Clones share state, so a test can keep one handle while the app owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClipboard {
    /// Every text written, oldest first
    writes: Arc<Mutex<Vec<String>>>,
    /// When set, writes fail with this error
    failure: Arc<Mutex<Option<ClipboardError>>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail with `error`.
    pub fn fail_with(&self, error: ClipboardError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// The most recent successful write.
    pub fn contents(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }

    /// All successful writes.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardProvider for InMemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_writes() {
        let clipboard = InMemoryClipboard::new();
        clipboard.set_text("primeira").unwrap();
        clipboard.set_text("segunda").unwrap();
        assert_eq!(clipboard.contents(), Some("segunda".to_string()));
        assert_eq!(clipboard.writes().len(), 2);
    }

    #[test]
    fn test_failure_records_nothing() {
        let clipboard = InMemoryClipboard::new();
        clipboard.fail_with(ClipboardError::Unavailable("no display".to_string()));
        assert!(clipboard.set_text("texto").is_err());
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let clipboard = InMemoryClipboard::new();
        let handle = clipboard.clone();
        clipboard.set_text("compartilhado").unwrap();
        assert_eq!(handle.contents(), Some("compartilhado".to_string()));
    }
}
