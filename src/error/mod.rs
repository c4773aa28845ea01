//! Error types for triagem.
//!
//! | Error | Raised by | Surfaced as |
//! |-------|-----------|-------------|
//! | [`ValidationError`] | form validation before submit | blocking alert |
//! | [`SubmitError`] | `App::on_submit` | alert (validation) or log line (busy) |
//! | [`FileSelectError`] | choosing a file in file mode | transient notice |
//! | [`ConfigError`] | CLI / environment parsing | stderr, exit status 2 |
//!
//! Failures of the analysis request itself are not errors in this sense:
//! they are [`SubmissionOutcome`](crate::models::SubmissionOutcome) values
//! rendered by the error panel.

mod config;
mod file;
mod submit;

pub use config::ConfigError;
pub use file::FileSelectError;
pub use submit::{SubmitError, ValidationError};
