//! Route table.

use crate::handlers::{ai, auth, backup, billing, community, meta};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Builds the API router over the shared state.
///
/// Middleware (CORS, tracing) is layered on by the binary according to
/// its [`crate::ServerConfig`]; the route table itself is fixed.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(meta::root))
        .route("/schema", get(meta::schema_index))
        .route("/test", get(meta::health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/security/2fa/setup", get(auth::twofa_setup))
        .route("/api/security/2fa/verify", post(auth::twofa_verify))
        .route("/api/security/rbac", get(auth::rbac))
        .route("/api/ai/summary", post(ai::summary))
        .route("/api/ai/search", post(ai::search))
        .route("/api/ai/recommend", post(ai::recommend))
        .route("/api/billing/subscriptions", post(billing::create_subscription))
        .route("/api/billing/invoices", get(billing::list_invoices))
        .route(
            "/api/community/forums",
            post(community::create_post).get(community::list_posts),
        )
        .route("/api/backup/run", post(backup::run_backup))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use libvault_schema::SchemaRegistry;
    use libvault_store::{DocumentStore, StoreConfig};

    #[test]
    fn router_builds() {
        let state = Arc::new(AppState::new(
            DocumentStore::open(StoreConfig::default()).unwrap(),
            SchemaRegistry::builtin(),
        ));
        let _router = build_router(state);
    }
}
