//! Service banner, schema introspection, and diagnostics.

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

/// Service banner.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Human-readable readiness message.
    pub message: &'static str,
    /// Server version.
    pub version: &'static str,
}

/// `GET /` - service banner.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "LibVault Backend Ready",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Declared entity names, for the generic database viewer.
#[derive(Debug, Serialize)]
pub struct SchemaIndexResponse {
    /// Entity names declared in the registry.
    pub models: Vec<&'static str>,
}

/// `GET /schema` - list declared entity kinds.
///
/// Reads the static registry; never fails, even when empty.
pub async fn schema_index(State(state): State<Arc<AppState>>) -> Json<SchemaIndexResponse> {
    Json(SchemaIndexResponse {
        models: state.registry.list_entities(),
    })
}

/// Diagnostics for the `/test` endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// The HTTP layer itself is up if this was produced at all.
    pub backend: &'static str,
    /// Store status: `connected`, `degraded`, or `unconfigured`.
    pub store: &'static str,
    /// Whether a data directory was configured.
    pub data_dir_configured: bool,
    /// Up to ten collection names currently holding records.
    pub collections: Vec<String>,
}

/// `GET /test` - store reachability diagnostics.
///
/// Never fails: store trouble is reported inside the body, not as an
/// error status.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (store_status, mut collections) = if state.store.is_available() {
        match state.store.collections() {
            Ok(names) => ("connected", names),
            Err(_) => ("degraded", Vec::new()),
        }
    } else {
        ("unconfigured", Vec::new())
    };
    collections.truncate(10);

    Json(HealthResponse {
        backend: "running",
        store: store_status,
        data_dir_configured: std::env::var(libvault_store::DATA_DIR_ENV).is_ok(),
        collections,
    })
}
