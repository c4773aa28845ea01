//! Multipart form payload sent to `/analyze`.

use bytes::Bytes;

/// A file attached to the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    /// File name reported to the server
    pub file_name: String,
    /// MIME type of the part
    pub mime: String,
    /// File contents
    pub bytes: Bytes,
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, part: FilePart },
}

impl FormField {
    pub fn name(&self) -> &str {
        match self {
            FormField::Text { name, .. } | FormField::File { name, .. } => name,
        }
    }
}

/// Ordered list of form fields, built with a consuming builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<FormField>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a file field.
    pub fn file(mut self, name: impl Into<String>, part: FilePart) -> Self {
        self.fields.push(FormField::File {
            name: name.into(),
            part,
        });
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<FormField> {
        self.fields
    }

    /// Value of the first text field called `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|field| match field {
            FormField::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// The first file field called `name`.
    pub fn file_part(&self, name: &str) -> Option<&FilePart> {
        self.fields.iter().find_map(|field| match field {
            FormField::File { name: n, part } if n == name => Some(part),
            _ => None,
        })
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name() == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Guess a MIME type from a file name's extension.
pub fn guess_mime(file_name: &str) -> &'static str {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("txt") => "text/plain",
        Some("pdf") => "application/pdf",
        Some("eml") => "message/rfc822",
        _ => "application/octet-stream",
    }
}
