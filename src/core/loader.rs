//! Local file loading.
//!
//! A [`FileLoader`] tracks the latest read and its result. Reading itself is
//! done by [`read_file`] over any [`FileSource`]; the browser `File` handle is
//! one such source (see `utils::file`).
//!
//! Every selection is stamped with a [`ReadTicket`]. Only the completion
//! carrying the newest ticket is applied, so picking files in quick succession
//! always ends on the last file picked.

use super::error::FileReadError;
use crate::models::FileReadResult;

/// Something that can be read into memory as a whole.
#[allow(async_fn_in_trait)]
pub trait FileSource {
    /// Display name (e.g., "notes.txt").
    fn display_name(&self) -> String;

    /// Size in bytes, if known up front.
    fn size(&self) -> Option<u64>;

    /// Read the full contents.
    async fn read_bytes(&self) -> Result<Vec<u8>, FileReadError>;
}

/// Decode file bytes as text, dropping a leading byte order mark.
///
/// A UTF-16 BOM (`FF FE` or `FE FF`) selects UTF-16 in that byte order;
/// everything else must be valid UTF-8.
pub fn decode_text(bytes: Vec<u8>) -> Result<String, FileReadError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return decode_utf16(&bytes[2..], u16::from_le_bytes);
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return decode_utf16(&bytes[2..], u16::from_be_bytes);
    }
    let mut text =
        String::from_utf8(bytes).map_err(|e| FileReadError::Decode(e.utf8_error().to_string()))?;
    if text.starts_with('\u{feff}') {
        text.drain(..'\u{feff}'.len_utf8());
    }
    Ok(text)
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, FileReadError> {
    if bytes.len() % 2 != 0 {
        return Err(FileReadError::Decode(
            "UTF-16 text has an odd number of bytes".to_string(),
        ));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| FileReadError::Decode(e.to_string()))
}

/// Message shown to the user when a read fails.
pub fn failure_message(name: Option<&str>, error: &FileReadError) -> String {
    match name {
        Some(name) => format!("Error reading file \"{}\": {}", name, error),
        None => format!("Error reading file: {}", error),
    }
}

/// Read `source` completely and decode it as text.
///
/// Never fails: errors are folded into [`FileReadResult::Failure`].
pub async fn read_file<S: FileSource>(source: &S) -> FileReadResult {
    let name = source.display_name();
    match source.read_bytes().await.and_then(decode_text) {
        Ok(content) => FileReadResult::Success { name, content },
        Err(error) => FileReadResult::Failure {
            name: Some(name),
            error,
        },
    }
}

/// What a finished read did to the loader, and what the user must be told.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The file's content is now shown.
    Shown,
    /// The failure is now shown; the message must be surfaced to the user.
    Failed(String),
    /// A newer selection superseded this read. Nothing changed.
    Stale,
}

/// Identifies one `select_file` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadTicket(u64);

/// A read that has been started but not completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRead {
    pub ticket: ReadTicket,
    pub name: String,
    pub size: Option<u64>,
}

/// State of the file viewer: the in-flight read, if any, and the last result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileLoader {
    issued: u64,
    pending: Option<PendingRead>,
    result: Option<FileReadResult>,
}

impl FileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly selected file and return the ticket its read must
    /// complete with. `None` (nothing picked) leaves the state untouched.
    pub fn select_file<S: FileSource>(&mut self, handle: Option<&S>) -> Option<ReadTicket> {
        let source = handle?;
        self.issued += 1;
        let ticket = ReadTicket(self.issued);
        self.pending = Some(PendingRead {
            ticket,
            name: source.display_name(),
            size: source.size(),
        });
        Some(ticket)
    }

    /// Apply a finished read.
    ///
    /// Leaves the state unchanged and returns [`ReadOutcome::Stale`] if a
    /// newer selection has been made since `ticket` was issued.
    pub fn complete(&mut self, ticket: ReadTicket, result: FileReadResult) -> ReadOutcome {
        if ticket != ReadTicket(self.issued) {
            return ReadOutcome::Stale;
        }
        let outcome = match &result {
            FileReadResult::Success { .. } => ReadOutcome::Shown,
            FileReadResult::Failure { name, error } => {
                ReadOutcome::Failed(failure_message(name.as_deref(), error))
            }
        };
        self.pending = None;
        self.result = Some(result);
        outcome
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingRead> {
        self.pending.as_ref()
    }

    /// The most recently applied result.
    pub fn result(&self) -> Option<&FileReadResult> {
        self.result.as_ref()
    }

    /// Name of the file currently shown, or being loaded.
    pub fn current_name(&self) -> Option<&str> {
        self.pending
            .as_ref()
            .map(|p| p.name.as_str())
            .or_else(|| self.result.as_ref().and_then(|r| r.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MemoryFile {
        name: &'static str,
        bytes: Result<Vec<u8>, FileReadError>,
    }

    impl MemoryFile {
        fn text(name: &'static str, text: &str) -> Self {
            Self {
                name,
                bytes: Ok(text.as_bytes().to_vec()),
            }
        }

        fn failing(name: &'static str, error: FileReadError) -> Self {
            Self {
                name,
                bytes: Err(error),
            }
        }
    }

    impl FileSource for MemoryFile {
        fn display_name(&self) -> String {
            self.name.to_string()
        }

        fn size(&self) -> Option<u64> {
            self.bytes.as_ref().ok().map(|b| b.len() as u64)
        }

        async fn read_bytes(&self) -> Result<Vec<u8>, FileReadError> {
            self.bytes.clone()
        }
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    #[test]
    fn test_decode_plain_utf8() {
        assert_eq!(decode_text("héllo\n".as_bytes().to_vec()).unwrap(), "héllo\n");
        assert_eq!(decode_text(Vec::new()).unwrap(), "");
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"data");
        assert_eq!(decode_text(bytes).unwrap(), "data");
    }

    #[test]
    fn test_decode_utf16_le_with_bom() {
        assert_eq!(
            decode_text(vec![0xFF, 0xFE, b'h', 0x00, b'i', 0x00]).unwrap(),
            "hi"
        );
        // "é\n" in UTF-16LE
        assert_eq!(
            decode_text(vec![0xFF, 0xFE, 0xE9, 0x00, 0x0A, 0x00]).unwrap(),
            "é\n"
        );
    }

    #[test]
    fn test_decode_utf16_be_with_bom() {
        assert_eq!(
            decode_text(vec![0xFE, 0xFF, 0x00, b'h', 0x00, b'i']).unwrap(),
            "hi"
        );
        assert_eq!(decode_text(vec![0xFE, 0xFF]).unwrap(), "");
    }

    #[test]
    fn test_decode_rejects_broken_utf16() {
        // odd byte count
        let err = decode_text(vec![0xFF, 0xFE, b'h', 0x00, b'i']).unwrap_err();
        assert!(matches!(err, FileReadError::Decode(_)));
        // unpaired high surrogate
        let err = decode_text(vec![0xFF, 0xFE, 0x00, 0xD8, b'a', 0x00]).unwrap_err();
        assert!(matches!(err, FileReadError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode_text(vec![0x66, 0x6f, 0xff, 0x6f]).unwrap_err();
        assert!(matches!(err, FileReadError::Decode(_)));
    }

    // =========================================================================
    // Reading
    // =========================================================================

    #[tokio::test]
    async fn test_read_valid_file() {
        let file = MemoryFile::text("notes.txt", "line one\nline two");
        assert_eq!(
            read_file(&file).await,
            FileReadResult::Success {
                name: "notes.txt".into(),
                content: "line one\nline two".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_read_unreadable_file() {
        let file = MemoryFile::failing("secret.txt", FileReadError::PermissionDenied);
        let result = read_file(&file).await;
        assert_eq!(
            result,
            FileReadResult::Failure {
                name: Some("secret.txt".into()),
                error: FileReadError::PermissionDenied,
            }
        );
        assert_eq!(
            result.reason().as_deref(),
            Some("Permission denied while reading file")
        );
    }

    #[tokio::test]
    async fn test_read_binary_file_fails_decode() {
        let file = MemoryFile {
            name: "image.png",
            bytes: Ok(vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0xff]),
        };
        match read_file(&file).await {
            FileReadResult::Failure { error, .. } => {
                assert!(matches!(error, FileReadError::Decode(_)))
            }
            other => panic!("expected decode failure, got {:?}", other),
        }
    }

    // =========================================================================
    // Loader state
    // =========================================================================

    #[test]
    fn test_no_handle_is_noop() {
        let mut loader = FileLoader::new();
        assert_eq!(loader.select_file::<MemoryFile>(None), None);
        assert_eq!(loader, FileLoader::new());

        let first = MemoryFile::text("a.txt", "a");
        let ticket = loader.select_file(Some(&first)).unwrap();
        let outcome = loader.complete(
            ticket,
            FileReadResult::Success {
                name: "a.txt".into(),
                content: "a".into(),
            },
        );
        assert_eq!(outcome, ReadOutcome::Shown);
        let before = loader.clone();
        assert_eq!(loader.select_file::<MemoryFile>(None), None);
        assert_eq!(loader, before);
    }

    #[test]
    fn test_pending_state_reports_name() {
        let mut loader = FileLoader::new();
        let file = MemoryFile::text("draft.md", "# Draft");
        let ticket = loader.select_file(Some(&file)).unwrap();
        assert!(loader.is_loading());
        assert_eq!(loader.current_name(), Some("draft.md"));
        assert_eq!(
            loader.pending(),
            Some(&PendingRead {
                ticket,
                name: "draft.md".into(),
                size: Some(7),
            })
        );
        assert!(loader.result().is_none());
    }

    async fn select_and_read(loader: &mut FileLoader, file: &MemoryFile) -> ReadOutcome {
        let ticket = loader.select_file(Some(file)).unwrap();
        let result = read_file(file).await;
        loader.complete(ticket, result)
    }

    #[tokio::test]
    async fn test_result_replaces_previous_result() {
        let mut loader = FileLoader::new();
        assert_eq!(
            select_and_read(&mut loader, &MemoryFile::text("one.txt", "1")).await,
            ReadOutcome::Shown
        );
        let missing = MemoryFile::failing("two.txt", FileReadError::NotFound);
        assert!(matches!(
            select_and_read(&mut loader, &missing).await,
            ReadOutcome::Failed(_)
        ));
        assert!(!loader.is_loading());
        assert_eq!(
            loader.result(),
            Some(&FileReadResult::Failure {
                name: Some("two.txt".into()),
                error: FileReadError::NotFound,
            })
        );

        assert_eq!(
            select_and_read(&mut loader, &MemoryFile::text("three.txt", "3")).await,
            ReadOutcome::Shown
        );
        assert_eq!(loader.result().and_then(|r| r.content()), Some("3"));
        assert_eq!(loader.current_name(), Some("three.txt"));
    }

    #[tokio::test]
    async fn test_stale_completion_is_dropped() {
        let mut loader = FileLoader::new();
        let slow = MemoryFile::text("slow.txt", "slow");
        let fast = MemoryFile::text("fast.txt", "fast");

        let slow_ticket = loader.select_file(Some(&slow)).unwrap();
        let fast_ticket = loader.select_file(Some(&fast)).unwrap();
        assert!(fast_ticket > slow_ticket);

        assert_eq!(
            loader.complete(fast_ticket, read_file(&fast).await),
            ReadOutcome::Shown
        );
        assert_eq!(
            loader.complete(slow_ticket, read_file(&slow).await),
            ReadOutcome::Stale
        );

        assert_eq!(loader.result().and_then(|r| r.name()), Some("fast.txt"));
        assert_eq!(loader.result().and_then(|r| r.content()), Some("fast"));
    }

    #[tokio::test]
    async fn test_stale_completion_keeps_newer_read_pending() {
        let mut loader = FileLoader::new();
        let first = MemoryFile::text("first.txt", "1");
        let second = MemoryFile::text("second.txt", "2");

        let first_ticket = loader.select_file(Some(&first)).unwrap();
        let _second_ticket = loader.select_file(Some(&second)).unwrap();

        assert_eq!(
            loader.complete(first_ticket, read_file(&first).await),
            ReadOutcome::Stale
        );
        assert!(loader.is_loading());
        assert_eq!(loader.current_name(), Some("second.txt"));
        assert!(loader.result().is_none());
    }

    // =========================================================================
    // User notification
    // =========================================================================

    #[tokio::test]
    async fn test_applied_failure_yields_message() {
        let mut loader = FileLoader::new();
        let locked = MemoryFile::failing("secret.txt", FileReadError::PermissionDenied);
        assert_eq!(
            select_and_read(&mut loader, &locked).await,
            ReadOutcome::Failed(
                "Error reading file \"secret.txt\": Permission denied while reading file"
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_applied_decode_failure_yields_message() {
        let mut loader = FileLoader::new();
        let binary = MemoryFile {
            name: "blob.bin",
            bytes: Ok(vec![0x00, 0xff, 0x41]),
        };
        match select_and_read(&mut loader, &binary).await {
            ReadOutcome::Failed(message) => {
                assert!(message.starts_with("Error reading file \"blob.bin\": File is not valid"))
            }
            other => panic!("expected failure notice, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stale_failure_is_not_surfaced() {
        let mut loader = FileLoader::new();
        let broken = MemoryFile::failing("old.txt", FileReadError::Io("gone".into()));
        let fresh = MemoryFile::text("new.txt", "ok");

        let stale_ticket = loader.select_file(Some(&broken)).unwrap();
        let fresh_ticket = loader.select_file(Some(&fresh)).unwrap();

        assert_eq!(
            loader.complete(stale_ticket, read_file(&broken).await),
            ReadOutcome::Stale
        );
        assert_eq!(
            loader.complete(fresh_ticket, read_file(&fresh).await),
            ReadOutcome::Shown
        );
        assert!(loader.result().is_some_and(|r| r.reason().is_none()));
    }

    #[test]
    fn test_failure_message_without_name() {
        assert_eq!(
            failure_message(None, &FileReadError::NotFound),
            "Error reading file: File not found"
        );
    }
}
