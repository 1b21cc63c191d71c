//! Custom error types for the application.
//!
//! - [`FileReadError`] - failures while reading a user-selected local file

use thiserror::Error;

/// Errors produced while reading a local file into memory.
///
/// Browser `DOMException` rejections are mapped onto these variants by
/// [`FileReadError::from_dom_exception`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileReadError {
    /// The file could not be read (I/O failure, file changed on disk, etc.)
    #[error("Could not read file: {0}")]
    Io(String),
    /// The browser refused access to the file
    #[error("Permission denied while reading file")]
    PermissionDenied,
    /// The file no longer exists at the selected location
    #[error("File not found")]
    NotFound,
    /// The bytes are not valid UTF-8 text
    #[error("File is not valid UTF-8 text: {0}")]
    Decode(String),
}

impl FileReadError {
    /// Map a `DOMException` name and message onto a read error.
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        match name {
            "NotFoundError" => Self::NotFound,
            "SecurityError" | "NotAllowedError" => Self::PermissionDenied,
            "EncodingError" => Self::Decode(message.to_string()),
            _ if message.is_empty() => Self::Io(name.to_string()),
            _ => Self::Io(message.to_string()),
        }
    }
}
