// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors that surface to HTTP callers. Remote-model failures never appear
/// here: the chat handler resolves them to fallback text before returning.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("internal server error")]
    Internal {
        #[source]
        source: anyhow::Error,
        /// Include diagnostic detail in the response body (development mode).
        expose_details: bool,
    },
}

impl AppError {
    pub fn internal(source: anyhow::Error, expose_details: bool) -> Self {
        Self::Internal {
            source,
            expose_details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Internal {
                source,
                expose_details,
            } => {
                tracing::error!(error = %source, "internal server error");
                let body = if expose_details {
                    json!({ "error": "Internal server error", "details": source.to_string() })
                } else {
                    json!({ "error": "Internal server error" })
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
