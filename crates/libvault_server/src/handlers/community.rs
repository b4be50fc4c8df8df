//! Community forum endpoints.

use crate::error::ApiResult;
use crate::handlers::ai::list_or_empty;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use libvault_store::{Document, Filter};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Forum post creation request.
#[derive(Debug, Deserialize)]
pub struct ForumPostRequest {
    /// Author user id. Untyped reference; nothing checks it exists.
    pub user_id: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// `POST /api/community/forums` - create a forum post.
///
/// Fills ForumPost defaults (a zero like count) and writes the record
/// verbatim to the `forumpost` collection.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ForumPostRequest>,
) -> ApiResult<Json<Document>> {
    let mut fields = Map::new();
    fields.insert("user_id".into(), Value::String(payload.user_id));
    fields.insert("title".into(), Value::String(payload.title));
    fields.insert("content".into(), Value::String(payload.content));
    fields.insert("tags".into(), json!(payload.tags));
    if let Some(def) = state.registry.get("ForumPost") {
        def.fill_defaults(&mut fields);
    }

    let id = state.store.create_document("forumpost", fields.clone())?;
    Ok(Json(Document::new(id, fields)))
}

/// Forum listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ForumQuery {
    /// Restrict to posts carrying this tag when present.
    pub tag: Option<String>,
}

/// Forum listing response.
#[derive(Debug, Serialize)]
pub struct ForumListResponse {
    /// Matching posts, at most fifty.
    pub posts: Vec<Document>,
}

/// `GET /api/community/forums` - list posts, optionally by tag.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ForumQuery>,
) -> ApiResult<Json<ForumListResponse>> {
    let filter = match query.tag {
        Some(tag) => Filter::new().eq("tags", tag),
        None => Filter::new(),
    };
    let posts = list_or_empty(state.store.get_documents("forumpost", &filter, Some(50)))?;
    Ok(Json(ForumListResponse { posts }))
}
