//! The email file chosen in file mode.
//!
//! Terminals have no file dialog, so a file is chosen by typing or pasting
//! its path. Drag-and-drop pastes the path, sometimes quoted or with spaces
//! backslash-escaped; [`normalize_path`] undoes both.

use bytes::Bytes;
use std::path::{Path, PathBuf};

use crate::error::FileSelectError;

/// A file read into memory, ready to be attached to the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSelection {
    /// File name shown in the filename display and sent to the server
    pub name: String,
    /// Resolved path the bytes were read from
    pub path: PathBuf,
    /// File contents
    pub bytes: Bytes,
}

impl FileSelection {
    /// Read the file at `raw_path`, refusing anything over `max_bytes`.
    pub fn load(raw_path: &str, max_bytes: u64) -> Result<Self, FileSelectError> {
        let path = normalize_path(raw_path);

        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FileSelectError::NotFound(path))
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(FileSelectError::NotAFile(path));
        }
        if metadata.len() > max_bytes {
            return Err(FileSelectError::TooLarge {
                size: metadata.len(),
                limit: max_bytes,
            });
        }

        let bytes = std::fs::read(&path)?;
        let name = file_name_of(&path);

        Ok(Self {
            name,
            path,
            bytes: Bytes::from(bytes),
        })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Turn user-entered path text into a path.
///
/// Trims whitespace, strips one pair of matching quotes, unescapes `\ `,
/// and expands a leading `~`.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|&quote| {
            trimmed
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(trimmed);
    let unescaped = unquoted.replace("\\ ", " ");

    if unescaped == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = unescaped.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(unescaped)
}
