//! JSON-file result storage.
//!
//! All records live in one file as a pretty-printed JSON array. The file is
//! read whole on every load and rewritten whole on every save. There is no
//! locking: two processes sharing a file race, and the last writer wins.

use crate::error::{StorageError, StorageResult};
use crate::types::AccessStatus;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default file name of the results file.
pub const DATA_FILE_NAME: &str = "url_checks.json";

/// A persisted check outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// The URL exactly as the operator entered it.
    pub url: String,
    /// Outcome of the check.
    pub status: AccessStatus,
}

impl CheckRecord {
    /// Create a new check record.
    pub fn new(url: impl Into<String>, status: AccessStatus) -> Self {
        Self {
            url: url.into(),
            status,
        }
    }

    /// Get a one-line summary of the record.
    pub fn summary(&self) -> String {
        format!("URL: {} | Status: {}", self.url, self.status)
    }
}

/// Append-only record list backed by a JSON file.
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    /// Create a store backed by the given file. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file holding an empty array if it does not exist.
    ///
    /// Returns `true` if the file was created.
    pub fn ensure_initialized(&self) -> StorageResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::SaveFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        }

        self.save(&[])?;
        tracing::debug!(path = %self.path.display(), "initialized results file");
        Ok(true)
    }

    /// Load every stored record, in insertion order.
    ///
    /// A missing file or a blank one loads as an empty list.
    pub fn load(&self) -> StorageResult<Vec<CheckRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::LoadFailed {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Load every stored record, reporting and swallowing any failure.
    ///
    /// A corrupt file is indistinguishable from an empty one to the caller.
    pub fn load_or_empty(&self) -> Vec<CheckRecord> {
        match self.load() {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error = %e, "error loading results");
                Vec::new()
            }
        }
    }

    /// Overwrite the backing file with the given records.
    pub fn save(&self, records: &[CheckRecord]) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(records)?;

        fs::write(&self.path, content).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Append one record: load, push, save.
    ///
    /// Unreadable existing content is replaced by a list holding only the
    /// new record.
    pub fn append(&self, record: CheckRecord) -> StorageResult<()> {
        let mut records = self.load_or_empty();
        records.push(record);
        self.save(&records)
    }

    /// Number of stored records, or zero if the file cannot be read.
    pub fn count(&self) -> usize {
        self.load_or_empty().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, ResultStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join(DATA_FILE_NAME));
        (dir, store)
    }

    #[test]
    fn test_record_creation() {
        let record = CheckRecord::new("example.com", AccessStatus::Accessible);
        assert_eq!(record.url, "example.com");
        assert_eq!(record.summary(), "URL: example.com | Status: Accessible");
    }

    #[test]
    fn test_record_serialization_shape() {
        let record = CheckRecord::new("example.com", AccessStatus::Blocked);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"url":"example.com","status":"Blocked"}"#);
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let (_dir, store) = temp_store();
        let records = vec![
            CheckRecord::new("a.com", AccessStatus::Accessible),
            CheckRecord::new("b.org", AccessStatus::Blocked),
            CheckRecord::new("a.com", AccessStatus::Blocked),
        ];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_saved_file_is_pretty_json_array() {
        let (_dir, store) = temp_store();
        store
            .save(&[CheckRecord::new("example.com", AccessStatus::Accessible)])
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "[\n  {\n    \"url\": \"example.com\",\n    \"status\": \"Accessible\"\n  }\n]"
        );
    }

    #[test]
    fn test_ensure_initialized_creates_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("nested").join(DATA_FILE_NAME));

        assert!(store.ensure_initialized().unwrap());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_ensure_initialized_keeps_existing_file() {
        let (_dir, store) = temp_store();
        store
            .save(&[CheckRecord::new("example.com", AccessStatus::Accessible)])
            .unwrap();

        assert!(!store.ensure_initialized().unwrap());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_missing_and_blank_files_load_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_empty());

        fs::write(store.path(), "").unwrap();
        assert!(store.load().unwrap().is_empty());

        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.load(), Err(StorageError::Corrupt { .. })));
        assert!(store.load_or_empty().is_empty());
    }

    #[test]
    fn test_unknown_status_is_corrupt() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), r#"[{"url":"a.com","status":"Maybe"}]"#).unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn test_append_grows_without_dedup() {
        let (_dir, store) = temp_store();
        store.ensure_initialized().unwrap();

        store
            .append(CheckRecord::new("example.com", AccessStatus::Accessible))
            .unwrap();
        store
            .append(CheckRecord::new("example.com", AccessStatus::Accessible))
            .unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("missing").join(DATA_FILE_NAME));

        assert!(matches!(
            store.save(&[]),
            Err(StorageError::SaveFailed { .. })
        ));
    }
}
