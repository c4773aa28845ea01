//! Navigation methods for the App: mode selection, back, reset, scrolling.

use std::time::Instant;

use tracing::{debug, info};

use crate::domain::Section;
use crate::state::InputMode;

use super::types::Notice;
use super::App;

impl App {
    /// Make `mode` the active input channel.
    pub fn set_mode(&mut self, mode: InputMode) {
        if self.form.set_mode(mode) {
            debug!(?mode, "Input mode changed");
            self.mark_dirty();
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.form.mode().toggled());
    }

    /// Hide the result and error panels and bring the form back. Input is kept.
    pub fn back_to_form(&mut self) {
        debug!(from = ?self.panels.view, "Back to form");
        self.panels.hide();
        self.scroll.scroll_into_view(Section::Compose);
        self.mark_dirty();
    }

    /// Clear every input and panel and return to text mode.
    pub fn clear_form(&mut self) {
        info!("Form cleared");
        self.form.reset();
        self.panels.hide();
        self.panels.copied_at = None;
        self.busy.release();
        self.alert = None;
        self.scroll.scroll_into_view(Section::Compose);
        self.mark_dirty();
    }

    /// Select the file named in the path input.
    ///
    /// Failures keep the previous selection and raise a notice.
    pub fn select_file(&mut self) {
        let max_bytes = self.config.max_file_bytes();
        match self.form.select_file_from_input(max_bytes) {
            Ok(Some(file)) => {
                info!(name = %file.name, size = file.size(), "File selected");
            }
            Ok(None) => debug!("File selection cleared"),
            Err(err) => {
                info!(error = %err, "File selection failed");
                self.set_notice(err.to_string());
            }
        }
        self.mark_dirty();
    }

    /// Scroll the page by whole viewports. Negative scrolls up.
    pub fn scroll_pages(&mut self, pages: i32) {
        let page = i32::from(self.viewport_height.saturating_sub(2).max(1));
        self.scroll.scroll_by(pages * page);
        self.mark_dirty();
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.set_notice_at(text, Instant::now());
    }

    pub(crate) fn set_notice_at(&mut self, text: impl Into<String>, now: Instant) {
        self.notice = Some(Notice::new(text, now));
        self.mark_dirty();
    }

    pub fn dismiss_alert(&mut self) {
        if self.alert.take().is_some() {
            self.mark_dirty();
        }
    }
}
