//! File-backed handbook store.
//!
//! The handbook is a plain UTF-8 text file read once at startup. The
//! store keeps the full text in memory; retrieval works on paragraphs,
//! so no index is built.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use demerit_core::{DemeritError, Result};

#[derive(Debug)]
pub struct HandbookStore {
    path: PathBuf,
    text: String,
    loaded_at: DateTime<Utc>,
}

impl HandbookStore {
    /// Read the handbook file. Fails if the file is missing or not
    /// valid UTF-8; an empty file is allowed and simply never matches.
    pub fn open(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DemeritError::Handbook(format!("Failed to read {}: {e}", path.display())))?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
            loaded_at: Utc::now(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_reads_file() {
        let path = std::env::temp_dir().join("demerit-test-open.txt");
        std::fs::write(&path, "Some handbook text.").unwrap();
        let store = HandbookStore::open(&path).unwrap();
        assert_eq!(store.text(), "Some handbook text.");
        assert_eq!(store.char_count(), 19);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_open_missing_file_errors() {
        let path = std::env::temp_dir().join("demerit-test-missing-handbook.txt");
        let _ = std::fs::remove_file(&path);
        let err = HandbookStore::open(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_open_empty_file_is_ok() {
        let path = std::env::temp_dir().join("demerit-test-empty-handbook.txt");
        std::fs::write(&path, "").unwrap();
        let store = HandbookStore::open(&path).unwrap();
        assert!(store.text().is_empty());
    }
}
