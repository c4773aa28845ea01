//! Application state containers.
//!
//! - [`FormState`]: input mode, text and path inputs, counter, filename display
//! - [`FileSelection`]: the file chosen in file mode

pub mod file_selection;
pub mod form;

pub use file_selection::{normalize_path, FileSelection};
pub use form::{FormState, InputMode, FILE_FIELD, NO_FILE_PLACEHOLDER, TEXT_FIELD};
