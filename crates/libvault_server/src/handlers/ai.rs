//! Rule-based "AI" endpoints.
//!
//! There is no inference anywhere here: summarization truncates to the
//! first sentences, search is a text filter on book titles, and
//! recommendations are the most readily available books. The endpoints
//! keep the response shapes a real model integration would use.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use libvault_store::{Document, Filter, StoreError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

fn default_max_sentences() -> usize {
    3
}

/// Summarization request.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// Input to summarize.
    pub text: String,
    /// Number of leading sentences to keep.
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,
}

/// Summarization response.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// The leading sentences, re-joined.
    pub summary: String,
    /// How many sentences the summary actually used.
    pub sentences_used: usize,
}

/// `POST /api/ai/summary` - keep the first `max_sentences` sentences.
pub async fn summary(Json(payload): Json<SummaryRequest>) -> Json<SummaryResponse> {
    let flattened = payload.text.replace('\n', " ");
    let sentences: Vec<&str> = flattened
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let used = sentences.len().min(payload.max_sentences);
    let mut summary = sentences[..used].join(". ");
    if !sentences.is_empty() {
        summary.push('.');
    }

    Json(SummaryResponse {
        summary,
        sentences_used: used,
    })
}

/// Search request.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text query, matched against book titles.
    pub query: String,
}

/// Search response.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// The query, echoed.
    pub query: String,
    /// Matching book records.
    pub results: Vec<Document>,
}

/// `POST /api/ai/search` - text search over book titles.
///
/// Uses the store's full-text matcher, which degrades to case-insensitive
/// substring matching on backends without a text index. An unconfigured
/// store yields empty results rather than an error.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SearchRequest>,
) -> ApiResult<Json<SearchResponse>> {
    let filter = Filter::new().text("title", payload.query.clone());
    let results = list_or_empty(state.store.get_documents("book", &filter, Some(10)))?;
    Ok(Json(SearchResponse {
        query: payload.query,
        results,
    }))
}

/// Recommendation request.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// The user the recommendations are nominally for.
    pub user_id: String,
}

/// Recommendation response.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    /// The user, echoed.
    pub user_id: String,
    /// Up to five available books.
    pub recommendations: Vec<Document>,
}

/// `POST /api/ai/recommend` - up to five available books.
///
/// Rule-based placeholder: recommends whatever is marked available, with
/// no personalization.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RecommendRequest>,
) -> ApiResult<Json<RecommendResponse>> {
    let filter = Filter::new().eq("available", true);
    let recommendations = list_or_empty(state.store.get_documents("book", &filter, Some(5)))?;
    Ok(Json(RecommendResponse {
        user_id: payload.user_id,
        recommendations,
    }))
}

/// Read endpoints degrade to empty lists when the store is unavailable;
/// only malformed calls propagate as errors.
pub(crate) fn list_or_empty(
    result: Result<Vec<Document>, StoreError>,
) -> ApiResult<Vec<Document>> {
    match result {
        Ok(docs) => Ok(docs),
        Err(StoreError::Unavailable { .. }) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}
