//! Shared application state.

use libvault_schema::SchemaRegistry;
use libvault_store::DocumentStore;

/// State shared by all request handlers.
///
/// Constructed once at process start and passed by handle; handlers never
/// reach for globals.
#[derive(Clone)]
pub struct AppState {
    /// The document store adapter.
    pub store: DocumentStore,
    /// The static schema registry.
    pub registry: SchemaRegistry,
}

impl AppState {
    /// Creates the application state.
    #[must_use]
    pub fn new(store: DocumentStore, registry: SchemaRegistry) -> Self {
        Self { store, registry }
    }
}
