//! Billing stubs: subscriptions and invoices.
//!
//! No payment provider is involved. Subscriptions are written verbatim to
//! the `subscription` collection with a renewal stamp; invoices are only
//! ever listed, never generated here.

use crate::error::ApiResult;
use crate::handlers::ai::list_or_empty;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use chrono::{Duration, Utc};
use libvault_store::{Document, Filter};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;

fn default_plan() -> String {
    "pro".to_string()
}

/// Subscription creation request.
#[derive(Debug, Deserialize)]
pub struct SubscriptionRequest {
    /// Subscribing user id. Untyped reference; nothing checks it exists.
    pub user_id: String,
    /// Plan name: free|pro|enterprise.
    #[serde(default = "default_plan")]
    pub plan: String,
}

/// `POST /api/billing/subscriptions` - record a subscription.
///
/// Defaults `status` to `active` per the Subscription schema and stamps
/// `renews_at` thirty days out, then writes the record verbatim.
pub async fn create_subscription(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubscriptionRequest>,
) -> ApiResult<Json<Document>> {
    let mut fields = Map::new();
    fields.insert("user_id".into(), Value::String(payload.user_id));
    fields.insert("plan".into(), Value::String(payload.plan));
    fields.insert(
        "renews_at".into(),
        json!((Utc::now() + Duration::days(30)).to_rfc3339()),
    );
    if let Some(def) = state.registry.get("Subscription") {
        def.fill_defaults(&mut fields);
    }

    let id = state.store.create_document("subscription", fields.clone())?;
    Ok(Json(Document::new(id, fields)))
}

/// Invoice listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct InvoiceQuery {
    /// Restrict to one user when present.
    pub user_id: Option<String>,
}

/// Invoice listing response.
#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    /// Matching invoice records, at most fifty.
    pub invoices: Vec<Document>,
}

/// `GET /api/billing/invoices` - list invoices, optionally per user.
pub async fn list_invoices(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InvoiceQuery>,
) -> ApiResult<Json<InvoiceListResponse>> {
    let filter = match query.user_id {
        Some(user_id) => Filter::new().eq("user_id", user_id),
        None => Filter::new(),
    };
    let invoices = list_or_empty(state.store.get_documents("invoice", &filter, Some(50)))?;
    Ok(Json(InvoiceListResponse { invoices }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use libvault_schema::SchemaRegistry;
    use libvault_store::{DocumentStore, StoreConfig};

    fn fresh_state() -> Arc<AppState> {
        Arc::new(AppState::new(
            DocumentStore::open(StoreConfig::default()).unwrap(),
            SchemaRegistry::builtin(),
        ))
    }

    #[tokio::test]
    async fn subscription_gets_defaults_and_renewal() {
        let state = fresh_state();
        let response = create_subscription(
            State(Arc::clone(&state)),
            Json(SubscriptionRequest {
                user_id: "u1".into(),
                plan: "enterprise".into(),
            }),
        )
        .await
        .unwrap();

        let doc = &response.0;
        assert_eq!(doc.get("user_id"), Some(&json!("u1")));
        assert_eq!(doc.get("plan"), Some(&json!("enterprise")));
        assert_eq!(doc.get("status"), Some(&json!("active")));
        assert!(doc.get("renews_at").is_some());

        // and it was persisted under the returned id
        let stored = state
            .store
            .get_documents("subscription", &Filter::new(), None)
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, doc.id);
    }

    #[tokio::test]
    async fn subscription_on_unconfigured_store_is_503() {
        let state = Arc::new(AppState::new(
            DocumentStore::unconfigured(),
            SchemaRegistry::builtin(),
        ));
        let err = create_subscription(
            State(state),
            Json(SubscriptionRequest {
                user_id: "u1".into(),
                plan: default_plan(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status(), axum::http::StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn invoices_filter_by_user() {
        let state = fresh_state();
        for (user, amount) in [("u1", 10.0), ("u2", 20.0), ("u1", 30.0)] {
            let mut fields = Map::new();
            fields.insert("user_id".into(), json!(user));
            fields.insert("amount".into(), json!(amount));
            state.store.create_document("invoice", fields).unwrap();
        }

        let response = list_invoices(
            State(Arc::clone(&state)),
            Query(InvoiceQuery {
                user_id: Some("u1".into()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.0.invoices.len(), 2);

        let response = list_invoices(State(state), Query(InvoiceQuery::default()))
            .await
            .unwrap();
        assert_eq!(response.0.invoices.len(), 3);
    }
}
