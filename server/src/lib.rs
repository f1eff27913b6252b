//! Thin HTTP layer over the search engine: request/response marshaling only,
//! all indexing and ranking behavior lives in the `engine` crate.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use engine::tokenizer::tokenize;
use engine::{Content, Document, SearchEngine, SearchResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    /// Whitespace-separated query terms.
    pub q: String,
    /// Optional override of the configured top-K.
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub status: &'static str,
    pub data: Vec<SearchResult>,
}

pub fn build_app(engine: Arc<SearchEngine>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/index", post(index_handler))
        .route("/search", get(search_handler))
        .with_state(AppState { engine })
        .layer(cors)
}

pub async fn index_handler(
    State(state): State<AppState>,
    Json(doc): Json<Document>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<StatusResponse>)> {
    if doc.id.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(StatusResponse {
                status: "error",
                message: "document id must not be empty".to_string(),
            }),
        ));
    }

    let tokens = tokenize(&doc.content, &doc.stop_words);
    tracing::debug!(doc_id = %doc.id, tokens = tokens.len(), "indexing document");
    state.engine.store_document(&doc.id, &tokens, Some(&doc.content));

    Ok(Json(StatusResponse {
        status: "success",
        message: "Indexed successfully".to_string(),
    }))
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    // Queries go through the same normalization as indexed text.
    let query_content = Content {
        string: params.q,
        ..Content::default()
    };
    let terms = tokenize(&query_content, &[]);

    let results = match params.k {
        Some(k) => state.engine.search_with_limit(&terms, k),
        None => state.engine.search(&terms),
    };

    Json(SearchResponse {
        status: "success",
        data: results,
    })
}
