//! Form submission: validation, the request task, and finalization.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::error::SubmitError;
use crate::models::{FormPayload, SubmissionOutcome};
use crate::state::InputMode;
use crate::traits::{Headers, HttpClient};

use super::types::{BusyRelease, SubmissionState};
use super::{App, AppMessage};

impl App {
    /// Handle a submit trigger.
    ///
    /// In file mode a typed path not yet confirmed with Enter is selected
    /// first. Validates the active mode's input; on success enters the
    /// submitting state and spawns exactly one request. Must be called inside
    /// a tokio runtime.
    pub fn on_submit(&mut self) -> Result<(), SubmitError> {
        if self.submission == SubmissionState::Submitting {
            warn!("Submit ignored: analysis already in progress");
            return Err(SubmitError::Busy);
        }

        if self.form.mode() == InputMode::File && self.form.has_unconfirmed_path() {
            self.select_file();
        }

        if let Err(err) = self.form.validate() {
            info!(mode = ?self.form.mode(), "Submit rejected: {}", err);
            self.alert = Some(err.to_string());
            self.mark_dirty();
            return Err(err.into());
        }

        let payload = self.form.payload(&self.config.extra_fields);
        let url = self.config.analyze_url();
        info!(
            url = %url,
            mode = ?self.form.mode(),
            fields = payload.len(),
            "Submitting email for analysis"
        );

        self.submission = SubmissionState::Submitting;
        self.busy.engage();
        self.panels.hide();
        self.mark_dirty();

        spawn_analysis(
            Arc::clone(&self.client),
            url,
            payload,
            self.message_tx.clone(),
        );
        Ok(())
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// The overlay and busy marker are cleared when this returns, including
    /// when presenting the outcome panics.
    pub fn complete_submission(&mut self, outcome: SubmissionOutcome) {
        info!(outcome = outcome.kind(), "Analysis finished");

        let Self {
            busy,
            submission,
            panels,
            scroll,
            needs_redraw,
            ..
        } = self;
        let _release = BusyRelease::new(busy);
        *submission = SubmissionState::Idle;
        *needs_redraw = true;

        match outcome {
            SubmissionOutcome::Success(result) => panels.show_result(result, scroll),
            failure => {
                let message = failure.error_message().unwrap_or_default();
                panels.show_error(message, scroll);
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }
}

/// Run one request on its own task and report back exactly once.
///
/// The request runs in an inner task so that a panic inside the client
/// surfaces as a join error, which is reported as a network failure.
pub(crate) fn spawn_analysis(
    client: Arc<dyn HttpClient>,
    url: String,
    payload: FormPayload,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) {
    tokio::spawn(async move {
        let request = tokio::spawn(async move {
            client.post_form(&url, payload, &Headers::new()).await
        });

        let outcome = match request.await {
            Ok(result) => SubmissionOutcome::from_response(result),
            Err(join_error) => {
                error!(error = %join_error, "Analysis request task failed");
                SubmissionOutcome::NetworkError(join_error.to_string())
            }
        };

        if message_tx
            .send(AppMessage::SubmissionFinished { outcome })
            .is_err()
        {
            warn!("Event loop gone before the analysis finished");
        }
    });
}
