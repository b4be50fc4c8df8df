//! # LibVault Store
//!
//! Generic document store adapter for LibVault.
//!
//! This crate provides the one contract every LibVault endpoint depends on:
//! schemaless `create_document` / `get_documents` operations against named
//! collections, backed by a pluggable [`DocumentBackend`].
//!
//! ## Design Principles
//!
//! - Collections are named groups of records of one entity kind; the store
//!   never validates fields against a schema.
//! - Identifiers are assigned by the store on creation and only ever cross
//!   the boundary as plain strings.
//! - Filters are conjunctions of per-field matchers; a record lacking a
//!   filtered field is excluded, never an error.
//! - An unconfigured or unreachable backend surfaces as
//!   [`StoreError::Unavailable`] per call; the process never crashes over a
//!   missing connection.
//!
//! ## Available Backends
//!
//! - [`MemoryBackend`] - For testing and ephemeral deployments
//! - [`FileBackend`] - JSON-lines files, one per collection, for persistence
//!
//! ## Example
//!
//! ```rust
//! use libvault_store::{DocumentStore, Filter, StoreConfig};
//! use serde_json::json;
//!
//! let store = DocumentStore::open(StoreConfig::default()).unwrap();
//!
//! let mut book = serde_json::Map::new();
//! book.insert("title".into(), json!("Dune"));
//! book.insert("author".into(), json!("Herbert"));
//! let id = store.create_document("book", book).unwrap();
//!
//! let hits = store
//!     .get_documents("book", &Filter::new().contains("title", "Dun"), Some(10))
//!     .unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id.to_string(), id.to_string());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod document;
mod error;
mod filter;
mod id;
mod store;

pub use backend::{BackendError, BackendResult, DocumentBackend, FileBackend, MemoryBackend};
pub use config::{StoreConfig, DATA_DIR_ENV};
pub use document::Document;
pub use error::{StoreError, StoreResult};
pub use filter::{Filter, Matcher};
pub use id::DocumentId;
pub use store::DocumentStore;
