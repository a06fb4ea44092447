//! The HTTP boundary: one POST route whose body is handed to the batch
//! decoder on a blocking thread. Method and empty-body policing happen
//! here; everything past that point reports errors as JSON payloads.

use crate::api;
use crate::pool::WorkerPool;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const BODY_LIMIT: usize = 16 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<WorkerPool>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handle))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .with_state(state)
}

async fn handle(State(state): State<AppState>, body: String) -> (StatusCode, Json<serde_json::Value>) {
    if body.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Empty POST body" })),
        );
    }

    let pool = Arc::clone(&state.pool);
    let result = tokio::task::spawn_blocking(move || api::process_body(&pool, &body))
        .await
        .unwrap_or_else(|_| json!({ "error": "Invalid JSON format." }));

    (StatusCode::OK, Json(result))
}
