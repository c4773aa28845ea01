//! Result and error panels.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::domain::{PageScroll, Section};
use crate::models::AnalysisResult;

use super::types::{ViewState, COPY_CONFIRM_DURATION};
use super::App;

/// Label of the copy button.
pub const COPY_LABEL: &str = "Copiar resposta";

/// Label of the copy button right after a successful copy.
pub const COPIED_LABEL: &str = "Copiado!";

/// Prefix of the notice raised when the clipboard refuses a write.
pub const COPY_FAILED_PREFIX: &str = "Não foi possível copiar: ";

/// Everything the result and error panels show.
#[derive(Debug, Clone, Default)]
pub struct Panels {
    pub view: ViewState,
    /// Last successful analysis; replaced by the next one
    pub result: Option<AnalysisResult>,
    /// Last failure message; replaced by the next one
    pub error_message: Option<String>,
    /// When the reply was last copied, while the confirmation label shows
    pub copied_at: Option<Instant>,
}

impl Panels {
    /// Show `result`, hiding the compose form.
    pub fn show_result(&mut self, result: AnalysisResult, scroll: &mut PageScroll) {
        info!(
            category = result.category_text(),
            has_reply = result.suggested_reply.is_some(),
            "Showing analysis result"
        );
        self.result = Some(result);
        self.copied_at = None;
        self.view = ViewState::Result;
        scroll.scroll_into_view(Section::Result);
    }

    /// Show `message` in the error panel. The compose form stays visible.
    pub fn show_error(&mut self, message: String, scroll: &mut PageScroll) {
        info!(message = %message, "Showing error");
        self.error_message = Some(message);
        self.view = ViewState::Error;
        scroll.scroll_into_view(Section::Error);
    }

    /// Hide both panels.
    pub fn hide(&mut self) {
        self.view = ViewState::Compose;
    }

    /// Copy button label at `now`.
    pub fn copy_label(&self, now: Instant) -> &'static str {
        match self.copied_at {
            Some(at) if now.duration_since(at) < COPY_CONFIRM_DURATION => COPIED_LABEL,
            _ => COPY_LABEL,
        }
    }

    /// Drop the confirmation once it has been shown long enough.
    ///
    /// Returns true if the label reverted.
    pub fn expire_copy_confirmation(&mut self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) if now.duration_since(at) >= COPY_CONFIRM_DURATION => {
                self.copied_at = None;
                true
            }
            _ => false,
        }
    }
}

impl App {
    /// Result presenter entry point.
    pub fn show_result(&mut self, result: AnalysisResult) {
        self.panels.show_result(result, &mut self.scroll);
        self.mark_dirty();
    }

    /// Error presenter entry point.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.panels.show_error(message.into(), &mut self.scroll);
        self.mark_dirty();
    }

    /// Copy the displayed suggested reply to the clipboard.
    ///
    /// Does nothing unless the result panel is showing.
    pub fn copy_response(&mut self) {
        self.copy_response_at(Instant::now());
    }

    pub(crate) fn copy_response_at(&mut self, now: Instant) {
        if !self.panels.view.result_visible() {
            return;
        }
        let Some(result) = &self.panels.result else {
            return;
        };

        match self.clipboard.set_text(result.reply_text()) {
            Ok(()) => {
                debug!("Copied suggested reply");
                self.panels.copied_at = Some(now);
            }
            Err(err) => {
                warn!(error = %err, "Clipboard write failed");
                self.set_notice_at(format!("{}{}", COPY_FAILED_PREFIX, err), now);
            }
        }
        self.mark_dirty();
    }

    /// Copy button label right now.
    pub fn copy_label(&self) -> &'static str {
        self.panels.copy_label(Instant::now())
    }
}
