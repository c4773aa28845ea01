//! AppMessage enum for async communication within the application.

use crate::models::SubmissionOutcome;

/// Messages sent from spawned tasks back to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// The analysis request finished, one way or another.
    ///
    /// Sent exactly once per submission.
    SubmissionFinished { outcome: SubmissionOutcome },
}
