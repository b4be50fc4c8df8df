//! File-based document backend.

use crate::backend::{BackendError, BackendResult, DocumentBackend};
use crate::id::DocumentId;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One persisted record, one line in a collection file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    id: DocumentId,
    fields: Map<String, Value>,
}

/// A file-based document backend.
///
/// Each collection is a JSON-lines file `<name>.jsonl` under the data
/// directory. Inserts append a single line and flush it, so a record is
/// either fully on disk or absent; scans read the whole file back.
///
/// This layout trades query speed for simplicity, which fits the store
/// contract: collections are small and filtering happens in the adapter
/// anyway.
///
/// # Thread Safety
///
/// A single mutex serializes file access. Acquisition uses a bounded wait
/// and reports [`BackendError::Timeout`] on expiry.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
    lock: Mutex<()>,
    lock_timeout: Duration,
}

impl FileBackend {
    /// Opens a file backend rooted at `dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: &Path, lock_timeout: Duration) -> BackendResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            lock: Mutex::new(()),
            lock_timeout,
        })
    }

    /// Returns the data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.jsonl"))
    }
}

impl DocumentBackend for FileBackend {
    fn insert(
        &self,
        collection: &str,
        id: DocumentId,
        fields: &Map<String, Value>,
    ) -> BackendResult<()> {
        let _guard = self
            .lock
            .try_lock_for(self.lock_timeout)
            .ok_or(BackendError::Timeout)?;

        let record = StoredRecord {
            id,
            fields: fields.clone(),
        };
        let line = serde_json::to_string(&record)
            .map_err(|e| BackendError::Corrupted(e.to_string()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.collection_path(collection))?;
        writeln!(file, "{line}")?;
        file.flush()?;
        Ok(())
    }

    fn scan(&self, collection: &str) -> BackendResult<Vec<(DocumentId, Map<String, Value>)>> {
        let _guard = self
            .lock
            .try_lock_for(self.lock_timeout)
            .ok_or(BackendError::Timeout)?;

        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(fs::File::open(path)?);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: StoredRecord = serde_json::from_str(&line)
                .map_err(|e| BackendError::Corrupted(format!("{collection}: {e}")))?;
            records.push((record.id, record.fields));
        }
        Ok(records)
    }

    fn collections(&self) -> BackendResult<Vec<String>> {
        let _guard = self
            .lock
            .try_lock_for(self.lock_timeout)
            .ok_or(BackendError::Timeout)?;

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "jsonl") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn open_backend(dir: &TempDir) -> FileBackend {
        FileBackend::open(dir.path(), Duration::from_secs(5)).unwrap()
    }

    fn book_fields(title: &str) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("title".into(), json!(title));
        fields
    }

    #[test]
    fn insert_then_scan() {
        let dir = TempDir::new().unwrap();
        let backend = open_backend(&dir);

        let id = DocumentId::new();
        backend.insert("book", id, &book_fields("Dune")).unwrap();

        let records = backend.scan("book").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, id);
        assert_eq!(records[0].1.get("title"), Some(&json!("Dune")));
    }

    #[test]
    fn records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let id = DocumentId::new();
        {
            let backend = open_backend(&dir);
            backend.insert("book", id, &book_fields("Dune")).unwrap();
        }

        let backend = open_backend(&dir);
        let records = backend.scan("book").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, id);
    }

    #[test]
    fn scan_missing_collection_is_empty() {
        let dir = TempDir::new().unwrap();
        let backend = open_backend(&dir);
        assert!(backend.scan("nonexistent_collection").unwrap().is_empty());
    }

    #[test]
    fn collections_lists_files() {
        let dir = TempDir::new().unwrap();
        let backend = open_backend(&dir);
        backend
            .insert("book", DocumentId::new(), &Map::new())
            .unwrap();
        backend
            .insert("invoice", DocumentId::new(), &Map::new())
            .unwrap();

        assert_eq!(
            backend.collections().unwrap(),
            vec!["book".to_string(), "invoice".to_string()]
        );
    }

    #[test]
    fn corrupted_line_is_reported() {
        let dir = TempDir::new().unwrap();
        let backend = open_backend(&dir);
        backend
            .insert("book", DocumentId::new(), &Map::new())
            .unwrap();

        fs::write(dir.path().join("book.jsonl"), "not json\n").unwrap();
        let result = backend.scan("book");
        assert!(matches!(result, Err(BackendError::Corrupted(_))));
    }
}
