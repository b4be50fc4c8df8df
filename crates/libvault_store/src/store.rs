//! The document store adapter.

use crate::backend::{DocumentBackend, FileBackend, MemoryBackend};
use crate::config::StoreConfig;
use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use crate::filter::Filter;
use crate::id::DocumentId;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Generic document CRUD adapter over a pluggable backend.
///
/// The store is schemaless: it persists whatever field map it is given and
/// filters records in the adapter on read. It holds no state besides the
/// backend handle, so clones share the same backend and calls are
/// independent of each other.
///
/// A store without a backend (see [`DocumentStore::unconfigured`]) answers
/// every operation with [`StoreError::Unavailable`] instead of panicking,
/// so a process can start before its storage is reachable.
#[derive(Clone)]
pub struct DocumentStore {
    backend: Option<Arc<dyn DocumentBackend>>,
}

impl DocumentStore {
    /// Opens a store per the configuration: file-backed when a data
    /// directory is set, in-memory otherwise.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` if the data directory cannot be prepared.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let backend: Arc<dyn DocumentBackend> = match &config.data_dir {
            Some(dir) => Arc::new(
                FileBackend::open(dir, config.lock_timeout)
                    .map_err(|e| StoreError::unavailable(e.to_string()))?,
            ),
            None => Arc::new(MemoryBackend::new(config.lock_timeout)),
        };
        Ok(Self {
            backend: Some(backend),
        })
    }

    /// Opens a store, falling back to the unconfigured state if the
    /// backend cannot be prepared.
    ///
    /// Startup never fails over storage; the failure resurfaces on each
    /// call as `Unavailable`.
    #[must_use]
    pub fn open_or_unavailable(config: StoreConfig) -> Self {
        match Self::open(config) {
            Ok(store) => store,
            Err(e) => {
                warn!("store backend unavailable, starting unconfigured: {e}");
                Self::unconfigured()
            }
        }
    }

    /// Creates a store with no backend; every operation reports
    /// `Unavailable`.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { backend: None }
    }

    /// Creates a store over an explicit backend. Seam for tests and
    /// embedders.
    #[must_use]
    pub fn with_backend(backend: Arc<dyn DocumentBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Whether a backend is configured.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> StoreResult<&Arc<dyn DocumentBackend>> {
        self.backend
            .as_ref()
            .ok_or_else(|| StoreError::unavailable("no backing store configured"))
    }

    /// Persists a new record in the named collection and returns its
    /// fresh identifier.
    ///
    /// No schema validation happens here; the field map is stored
    /// verbatim. The write is atomic with respect to the record and the
    /// record is visible to subsequent [`DocumentStore::get_documents`]
    /// calls.
    ///
    /// Retrying after `Unavailable` is **not** idempotent: each successful
    /// call creates a new record. Deduplicate upstream if you retry.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an empty or malformed collection name
    /// - `Unavailable` if the backend is absent, unreachable, or times out
    pub fn create_document(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> StoreResult<DocumentId> {
        validate_collection_name(collection)?;
        let backend = self.backend()?;

        let id = DocumentId::new();
        backend.insert(collection, id, &fields)?;
        debug!(collection, %id, "created document");
        Ok(id)
    }

    /// Returns records in the named collection matching every filter
    /// constraint, up to `limit`.
    ///
    /// Limit policy: `None` is unbounded, `Some(0)` returns nothing. An
    /// unknown collection or an unmatched filter yields an empty list,
    /// never an error. No ordering is guaranteed.
    ///
    /// Full-text constraints degrade to case-insensitive substring
    /// matching on backends without a text index; the return shape is
    /// identical either way.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an empty or malformed collection name
    /// - `Unavailable` if the backend is absent, unreachable, or times out
    pub fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Document>> {
        validate_collection_name(collection)?;
        let backend = self.backend()?;

        if limit == Some(0) {
            return Ok(Vec::new());
        }

        let text_supported = backend.supports_text_search();
        let mut documents: Vec<Document> = backend
            .scan(collection)?
            .into_iter()
            .filter(|(_, fields)| filter.matches(fields, text_supported))
            .map(|(id, fields)| Document::new(id, fields))
            .collect();

        if let Some(limit) = limit {
            documents.truncate(limit);
        }
        debug!(
            collection,
            matched = documents.len(),
            constraints = filter.len(),
            "query"
        );
        Ok(documents)
    }

    /// Returns the names of all collections holding records.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` if the backend is absent or unreachable.
    pub fn collections(&self) -> StoreResult<Vec<String>> {
        Ok(self.backend()?.collections()?)
    }
}

/// Collection names are non-empty and filesystem-safe: ASCII alphanumerics,
/// `_` and `-` only.
fn validate_collection_name(collection: &str) -> StoreResult<()> {
    if collection.trim().is_empty() {
        return Err(StoreError::invalid_argument(
            "collection name must not be empty",
        ));
    }
    if !collection
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(StoreError::invalid_argument(format!(
            "collection name contains unsupported characters: {collection:?}"
        )));
    }
    Ok(())
}
