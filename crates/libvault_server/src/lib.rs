//! # LibVault Server
//!
//! HTTP API layer for LibVault, a library-management demo backend.
//!
//! Every endpoint is thin glue over two collaborators: the
//! [`libvault_schema::SchemaRegistry`] for introspection and field
//! defaulting, and the [`libvault_store::DocumentStore`] for persistence.
//! Authentication, 2FA, billing, and backup endpoints are deliberate
//! stubs: they echo their input or write a record verbatim, nothing more.
//!
//! # Architecture
//!
//! State is one explicitly constructed [`AppState`] value created at
//! process start and shared behind an `Arc`; there is no ambient global
//! connection handle. Handlers that list records degrade to empty results
//! when the store is unconfigured, while write endpoints surface
//! `503 Service Unavailable`.
//!
//! ```rust
//! use libvault_server::{build_router, AppState};
//! use libvault_schema::SchemaRegistry;
//! use libvault_store::{DocumentStore, StoreConfig};
//! use std::sync::Arc;
//!
//! let state = AppState::new(
//!     DocumentStore::open(StoreConfig::default()).unwrap(),
//!     SchemaRegistry::builtin(),
//! );
//! let router = build_router(Arc::new(state));
//! # let _ = router;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod config;
mod error;
mod handlers;
mod routes;
mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use routes::build_router;
pub use state::AppState;
