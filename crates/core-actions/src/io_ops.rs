//! File IO helpers.
//!
//! Synchronous and minimal: the buffer serializes verbatim, so reads and
//! writes are plain string transfers. Failures are returned as text for the
//! status line rather than propagated; no IO error is fatal to the session.

use std::path::{Path, PathBuf};

/// Result of attempting to open a file.
#[derive(Debug)]
pub enum OpenFileResult {
    Success { content: String, file_name: PathBuf },
    Error(String),
}

pub fn open_file(path: &Path) -> OpenFileResult {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(target: "io", file = %path.display(), bytes = content.len(), "file_opened");
            OpenFileResult::Success {
                content,
                file_name: path.to_path_buf(),
            }
        }
        Err(e) => {
            tracing::error!(target: "io", file = %path.display(), %e, "file_open_error");
            OpenFileResult::Error(e.to_string())
        }
    }
}

/// Result of a write attempt.
#[derive(Debug)]
pub enum WriteFileResult {
    Success(PathBuf),
    Error(String),
}

pub fn write_file(path: &Path, content: &str) -> WriteFileResult {
    match std::fs::write(path, content) {
        Ok(()) => {
            tracing::info!(target: "io", file = %path.display(), bytes = content.len(), "file_written");
            WriteFileResult::Success(path.to_path_buf())
        }
        Err(e) => {
            tracing::error!(target: "io", file = %path.display(), %e, "file_write_error");
            WriteFileResult::Error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_open_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("code.py");
        match write_file(&path, "x = 1\ny = 2") {
            WriteFileResult::Success(p) => assert_eq!(p, path),
            WriteFileResult::Error(e) => panic!("write failed: {e}"),
        }
        match open_file(&path) {
            OpenFileResult::Success { content, file_name } => {
                assert_eq!(content, "x = 1\ny = 2");
                assert_eq!(file_name, path);
            }
            OpenFileResult::Error(e) => panic!("open failed: {e}"),
        }
    }

    #[test]
    fn open_missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        match open_file(&dir.path().join("absent.py")) {
            OpenFileResult::Error(_) => {}
            other => panic!("expected error, got {other:?}"),
        }
    }
}
