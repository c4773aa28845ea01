//! Compose form state: input mode, the two inputs, and their displays.

use crate::error::{FileSelectError, ValidationError};
use crate::models::{guess_mime, FilePart, FormPayload};
use crate::widgets::InputBox;

use super::file_selection::{normalize_path, FileSelection};

/// Form field carrying pasted email text.
pub const TEXT_FIELD: &str = "email_text";

/// Form field carrying the uploaded email file.
pub const FILE_FIELD: &str = "email_file";

/// Filename display when no file is selected.
pub const NO_FILE_PLACEHOLDER: &str = "Nenhum arquivo selecionado";

/// Which input channel is active. Exactly one is, always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Text,
    File,
}

impl InputMode {
    pub const ALL: [InputMode; 2] = [InputMode::Text, InputMode::File];

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Text => InputMode::File,
            InputMode::File => InputMode::Text,
        }
    }

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            InputMode::Text => "Colar texto",
            InputMode::File => "Enviar arquivo",
        }
    }
}

/// State behind the compose view.
#[derive(Debug, Clone)]
pub struct FormState {
    mode: InputMode,
    /// Email body typed or pasted in text mode
    pub text: InputBox,
    /// Path typed or pasted in file mode
    pub path_input: InputBox,
    file: Option<FileSelection>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            mode: InputMode::Text,
            text: InputBox::multiline().with_placeholder("Cole aqui o conteúdo do e-mail..."),
            path_input: InputBox::new().with_placeholder("Caminho do arquivo (.txt ou .pdf)"),
            file: None,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Activate `mode`, deactivating the other one.
    ///
    /// Returns true if the active mode changed.
    pub fn set_mode(&mut self, mode: InputMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn is_active(&self, mode: InputMode) -> bool {
        self.mode == mode
    }

    /// Characters in the text input.
    pub fn char_count(&self) -> usize {
        self.text.char_count()
    }

    /// Character counter display.
    pub fn char_counter_display(&self) -> String {
        self.char_count().to_string()
    }

    pub fn file(&self) -> Option<&FileSelection> {
        self.file.as_ref()
    }

    /// Selected file name, or the placeholder.
    pub fn file_name_display(&self) -> &str {
        self.file
            .as_ref()
            .map(|file| file.name.as_str())
            .unwrap_or(NO_FILE_PLACEHOLDER)
    }

    /// Select the file named in the path input.
    ///
    /// An empty path input clears the selection. On error the previous
    /// selection is kept.
    pub fn select_file_from_input(
        &mut self,
        max_bytes: u64,
    ) -> Result<Option<&FileSelection>, FileSelectError> {
        let raw = self.path_input.get_content().to_string();
        if raw.trim().is_empty() {
            self.file = None;
            return Ok(None);
        }
        let selection = FileSelection::load(&raw, max_bytes)?;
        Ok(Some(&*self.file.insert(selection)))
    }

    /// Whether the path input names something other than the selected file.
    pub fn has_unconfirmed_path(&self) -> bool {
        let raw = self.path_input.get_content();
        match &self.file {
            Some(file) => normalize_path(raw) != file.path,
            None => !raw.trim().is_empty(),
        }
    }

    /// Drop the current file selection and clear the path input.
    pub fn clear_file(&mut self) {
        self.file = None;
        self.path_input.clear();
    }

    /// Check the active mode's input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.mode {
            InputMode::Text if self.text.get_content().trim().is_empty() => {
                Err(ValidationError::EmptyText)
            }
            InputMode::File if self.file.is_none() || self.has_unconfirmed_path() => {
                Err(ValidationError::NoFile)
            }
            _ => Ok(()),
        }
    }

    /// Build the request body: the active mode's field, then `extra_fields`.
    pub fn payload(&self, extra_fields: &[(String, String)]) -> FormPayload {
        let mut payload = FormPayload::new();
        match self.mode {
            InputMode::Text => {
                payload = payload.text(TEXT_FIELD, self.text.get_content());
            }
            InputMode::File => {
                if let Some(file) = &self.file {
                    payload = payload.file(
                        FILE_FIELD,
                        FilePart {
                            file_name: file.name.clone(),
                            mime: guess_mime(&file.name).to_string(),
                            bytes: file.bytes.clone(),
                        },
                    );
                }
            }
        }
        extra_fields
            .iter()
            .fold(payload, |payload, (name, value)| payload.text(name, value))
    }

    /// Clear both inputs and return to text mode.
    pub fn reset(&mut self) {
        self.text.clear();
        self.clear_file();
        self.mode = InputMode::Text;
    }
}
