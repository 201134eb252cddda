use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use tracing::{error, info, warn};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HealthResponse, ModelInfo, utc_timestamp},
    services::catalog::{self, MessageKind},
    state::SharedState,
};

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_CATEGORY: &str = "general";
const SERVICE_NAME: &str = "Bantuan Backend";

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(_) => {
            warn!("chat request missing 'message' field");
            AppError::BadRequest("Missing required field: message".to_string())
        }
        _ => AppError::BadRequest("Request body must be JSON".to_string()),
    })?;

    let message = payload.message.trim();
    let language = payload.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let category = payload.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    if message.is_empty() {
        warn!("chat request received with empty message");
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    info!(
        message = %prefix(message, 100),
        %language,
        %category,
        "chat request"
    );

    // Any completion failure degrades to canned text rather than an HTTP
    // error: callers always get a 200 with some reply.
    let reply = match state.completion.complete(message, &language, &category).await {
        Ok(text) => text,
        Err(e) => {
            error!(
                error = %e,
                message = %prefix(message, 100),
                %language,
                %category,
                "completion failed, using fallback response"
            );
            catalog::canned(MessageKind::Fallback, &language).to_string()
        }
    };

    info!(response = %prefix(&reply, 100), "chat response");

    Ok(Json(ChatResponse::success(
        message.to_string(),
        reply,
        language,
        category,
    )))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: utc_timestamp(),
    })
}

pub async fn models_handler() -> Json<serde_json::Value> {
    let models = vec![ModelInfo {
        id: "default",
        name: "Default AI Model",
        description: "Default AI Foundry model for support",
        languages: catalog::language_codes(),
    }];
    Json(json!({ "status": "success", "models": models }))
}

pub async fn languages_handler() -> Json<serde_json::Value> {
    let languages: serde_json::Map<String, serde_json::Value> = catalog::SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| (code.to_string(), json!(name)))
        .collect();
    Json(json!({ "status": "success", "languages": languages }))
}

fn prefix(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
