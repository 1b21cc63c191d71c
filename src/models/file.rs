//! Local file read results.

use crate::core::error::FileReadError;

/// Outcome of reading one user-selected file.
///
/// Produced once per completed read and replaced wholesale by the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileReadResult {
    /// The file was read and decoded as text.
    Success {
        /// Display name of the file (e.g., "notes.txt")
        name: String,
        /// Full decoded text
        content: String,
    },
    /// The read failed.
    Failure {
        /// Display name of the file, if the handle exposed one
        name: Option<String>,
        /// What went wrong
        error: FileReadError,
    },
}

impl FileReadResult {
    /// Display name of the file this result belongs to.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Success { name, .. } => Some(name),
            Self::Failure { name, .. } => name.as_deref(),
        }
    }

    /// Decoded text, for successful reads.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Success { content, .. } => Some(content),
            Self::Failure { .. } => None,
        }
    }

    /// Human-readable failure reason, for failed reads.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error.to_string()),
        }
    }
}

/// How the viewer should present a loaded file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileKind {
    /// Markdown source, can be shown rendered
    Markdown,
    /// Anything else, shown verbatim
    #[default]
    PlainText,
}

impl FileKind {
    /// Detect the kind from a file name's extension.
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::PlainText;
        };
        match ext.to_lowercase().as_str() {
            "md" | "markdown" => Self::Markdown,
            _ => Self::PlainText,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_detection() {
        assert_eq!(FileKind::from_name("README.md"), FileKind::Markdown);
        assert_eq!(FileKind::from_name("notes.MARKDOWN"), FileKind::Markdown);
        assert_eq!(FileKind::from_name("notes.txt"), FileKind::PlainText);
        assert_eq!(FileKind::from_name("Makefile"), FileKind::PlainText);
        assert_eq!(FileKind::from_name("md"), FileKind::PlainText);
    }

    #[test]
    fn test_result_accessors() {
        let ok = FileReadResult::Success {
            name: "a.txt".into(),
            content: "hello".into(),
        };
        assert_eq!(ok.name(), Some("a.txt"));
        assert_eq!(ok.content(), Some("hello"));
        assert_eq!(ok.reason(), None);

        let failed = FileReadResult::Failure {
            name: None,
            error: FileReadError::NotFound,
        };
        assert_eq!(failed.name(), None);
        assert_eq!(failed.content(), None);
        assert_eq!(failed.reason().as_deref(), Some("File not found"));
    }
}
