//! HTTP surface: one search endpoint plus a health check.
//!
//! The index is built before the router and shared read-only through
//! [`AppState`]; handlers never mutate it.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::index::LyricIndex;
use crate::models::SearchResults;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<LyricIndex>,
}

impl AppState {
    pub fn new(index: LyricIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }
}

/// Query parameters for `/similar_lyrics`
#[derive(Debug, Deserialize)]
pub struct LyricsQuery {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub lines: usize,
}

/// Search errors
#[derive(Debug)]
pub enum SearchError {
    Pattern(String),
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SearchError::Pattern(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to build search pattern: {}", msg),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// GET /similar_lyrics?query=word
///
/// Matched lines grouped by album and track, albums in canonical order.
/// A missing or empty query returns `[]`.
pub async fn similar_lyrics(
    State(state): State<AppState>,
    Query(params): Query<LyricsQuery>,
) -> Result<Json<SearchResults>, SearchError> {
    let query = params.query.unwrap_or_default();
    if query.trim().is_empty() {
        debug!("No query provided");
        return Ok(Json(Vec::new()));
    }

    let results = state.index.search(&query).map_err(|e| {
        error!("Search for {:?} failed: {:#}", query, e);
        SearchError::Pattern(e.to_string())
    })?;

    let lines: usize = results
        .iter()
        .flat_map(|(_, album)| album.tracks.iter())
        .map(|track| track.text.len())
        .sum();
    debug!(
        query = %query,
        albums = results.len(),
        lines,
        "Results for query"
    );

    Ok(Json(results))
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        lines: state.index.len(),
    })
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/similar_lyrics", get(similar_lyrics))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
