// src/message.rs
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub language: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub status: String,
    pub message: String,
    pub response: String,
    pub language: String,
    pub category: String,
    pub timestamp: String,
}

impl ChatResponse {
    pub fn success(message: String, response: String, language: String, category: String) -> Self {
        Self {
            status: "success".to_string(),
            message,
            response,
            language,
            category,
            timestamp: utc_timestamp(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub languages: Vec<&'static str>,
}

/// Response construction time, UTC ISO-8601.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
