// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Json,
    Router,
    http::StatusCode,
    routing::{get, post},
};
use chat::{chat_handler, health_handler, languages_handler, models_handler};
use serde_json::json;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .route("/models", get(models_handler))
        .route("/languages", get(languages_handler));

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}
