//! Document backend trait and implementations.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::id::DocumentId;
use serde_json::{Map, Value};
use std::io;
use thiserror::Error;

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors that can occur in a document backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stored data could not be decoded.
    #[error("corrupted record: {0}")]
    Corrupted(String),

    /// A bounded lock wait expired.
    #[error("operation timed out waiting for the store")]
    Timeout,
}

/// A backend holding documents grouped into named collections.
///
/// Backends are **schemaless record stores**: they persist field maps
/// verbatim under store-assigned identifiers and know nothing about entity
/// schemas or filter semantics. Filtering happens in the adapter, after
/// `scan`.
///
/// # Invariants
///
/// - `insert` makes the record visible to subsequent `scan` calls
/// - `scan` of an unknown collection returns an empty list, not an error
/// - implementations must be `Send + Sync`; every operation must complete
///   within a bounded wait and report [`BackendError::Timeout`] on expiry
pub trait DocumentBackend: Send + Sync {
    /// Persists a record in the named collection.
    ///
    /// The write is atomic with respect to the single record: either the
    /// whole record becomes visible or none of it does.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted or the bounded
    /// wait expires.
    fn insert(&self, collection: &str, id: DocumentId, fields: &Map<String, Value>)
        -> BackendResult<()>;

    /// Returns every record in the named collection.
    ///
    /// Unknown collections yield an empty list. No ordering is guaranteed.
    ///
    /// # Errors
    ///
    /// Returns an error if records cannot be read or the bounded wait
    /// expires.
    fn scan(&self, collection: &str) -> BackendResult<Vec<(DocumentId, Map<String, Value>)>>;

    /// Returns the names of all collections holding at least one record.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be produced.
    fn collections(&self) -> BackendResult<Vec<String>>;

    /// Whether this backend maintains a full-text index.
    ///
    /// Backends without one still serve [`crate::Matcher::Text`] queries;
    /// the adapter degrades them to substring matching transparently.
    fn supports_text_search(&self) -> bool {
        false
    }
}
