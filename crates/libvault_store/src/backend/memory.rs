//! In-memory document backend.

use crate::backend::{BackendError, BackendResult, DocumentBackend};
use crate::id::DocumentId;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::time::Duration;

type Records = Vec<(DocumentId, Map<String, Value>)>;

/// An in-memory document backend.
///
/// Records live in a map of collection name to record list. Suitable for:
/// - Unit and integration tests
/// - Ephemeral deployments that don't need persistence
///
/// # Thread Safety
///
/// The backend is thread-safe. Lock acquisition uses a bounded wait; a
/// caller that cannot take the lock within the configured timeout gets
/// [`BackendError::Timeout`] instead of blocking indefinitely.
#[derive(Debug)]
pub struct MemoryBackend {
    collections: RwLock<BTreeMap<String, Records>>,
    lock_timeout: Duration,
}

impl MemoryBackend {
    /// Creates an empty in-memory backend with the given lock timeout.
    #[must_use]
    pub fn new(lock_timeout: Duration) -> Self {
        Self {
            collections: RwLock::new(BTreeMap::new()),
            lock_timeout,
        }
    }

    /// Total number of records across all collections.
    ///
    /// Testing aid; panics are acceptable here because the backend cannot
    /// be poisoned.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.collections.read().values().map(Vec::len).sum()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl DocumentBackend for MemoryBackend {
    fn insert(
        &self,
        collection: &str,
        id: DocumentId,
        fields: &Map<String, Value>,
    ) -> BackendResult<()> {
        let mut guard = self
            .collections
            .try_write_for(self.lock_timeout)
            .ok_or(BackendError::Timeout)?;
        guard
            .entry(collection.to_string())
            .or_default()
            .push((id, fields.clone()));
        Ok(())
    }

    fn scan(&self, collection: &str) -> BackendResult<Vec<(DocumentId, Map<String, Value>)>> {
        let guard = self
            .collections
            .try_read_for(self.lock_timeout)
            .ok_or(BackendError::Timeout)?;
        Ok(guard.get(collection).cloned().unwrap_or_default())
    }

    fn collections(&self) -> BackendResult<Vec<String>> {
        let guard = self
            .collections
            .try_read_for(self.lock_timeout)
            .ok_or(BackendError::Timeout)?;
        Ok(guard.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn insert_then_scan() {
        let backend = MemoryBackend::default();
        let id = DocumentId::new();
        backend
            .insert("book", id, &fields(&[("title", json!("Dune"))]))
            .unwrap();

        let records = backend.scan("book").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, id);
        assert_eq!(records[0].1.get("title"), Some(&json!("Dune")));
    }

    #[test]
    fn scan_unknown_collection_is_empty() {
        let backend = MemoryBackend::default();
        assert!(backend.scan("nonexistent_collection").unwrap().is_empty());
    }

    #[test]
    fn collections_lists_nonempty_only() {
        let backend = MemoryBackend::default();
        backend
            .insert("book", DocumentId::new(), &Map::new())
            .unwrap();
        backend
            .insert("invoice", DocumentId::new(), &Map::new())
            .unwrap();

        let names = backend.collections().unwrap();
        assert_eq!(names, vec!["book".to_string(), "invoice".to_string()]);
    }

    #[test]
    fn no_text_index() {
        let backend = MemoryBackend::default();
        assert!(!backend.supports_text_search());
    }

    #[test]
    fn record_count_tracks_inserts() {
        let backend = MemoryBackend::default();
        for _ in 0..3 {
            backend
                .insert("book", DocumentId::new(), &Map::new())
                .unwrap();
        }
        assert_eq!(backend.record_count(), 3);
    }
}
