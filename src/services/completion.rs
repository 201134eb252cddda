// src/services/completion.rs
//! Remote chat-completion client for the AI Foundry deployment API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::services::prompt::build_system_prompt;

const API_VERSION: &str = "2024-05-01-preview";
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;
const MAX_TOKENS: u32 = 200;
// The upstream API has no latency bound of its own; cap it here.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Why a completion attempt produced no text. Both variants trigger the
/// same fallback path in the chat handler; no retry is performed.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("AI Foundry endpoint or key not configured")]
    NotConfigured,
    #[error("AI Foundry call failed: {0}")]
    Remote(String),
}

/// One chat-completion call: request in, reply text out, or failure.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        message: &str,
        language: &str,
        category: &str,
    ) -> Result<String, CompletionError>;
}

/// reqwest-backed client for an Azure-hosted OpenAI deployment.
pub struct FoundryClient {
    client: reqwest::Client,
    endpoint: Option<String>,
    api_key: Option<String>,
    deployment: String,
}

impl FoundryClient {
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            deployment: config.deployment.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

#[derive(Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Option<Vec<ChatChoice>>,
}

#[derive(Deserialize)]
pub(crate) struct ChatChoice {
    pub message: Option<ChatMessage>,
}

pub(crate) fn build_request(
    deployment: &str,
    message: &str,
    language: &str,
    category: &str,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: deployment.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: build_system_prompt(language, category),
            },
            ChatMessage {
                role: "user".to_string(),
                content: message.to_string(),
            },
        ],
        temperature: TEMPERATURE,
        top_p: TOP_P,
        max_tokens: MAX_TOKENS,
    }
}

pub(crate) fn extract_reply(parsed: ChatCompletionResponse) -> Result<String, CompletionError> {
    parsed
        .choices
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|c| c.message.as_ref())
        .map(|m| m.content.trim().to_string())
        .ok_or_else(|| CompletionError::Remote("response contained no choices".to_string()))
}

#[async_trait]
impl CompletionBackend for FoundryClient {
    async fn complete(
        &self,
        message: &str,
        language: &str,
        category: &str,
    ) -> Result<String, CompletionError> {
        let (Some(endpoint), Some(api_key)) = (&self.endpoint, &self.api_key) else {
            warn!("AI_FOUNDRY_KEY or AI_FOUNDRY_ENDPOINT not configured");
            return Err(CompletionError::NotConfigured);
        };

        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            endpoint.trim_end_matches('/'),
            self.deployment,
            API_VERSION,
        );
        let body = build_request(&self.deployment, message, language, category);

        debug!(deployment = %self.deployment, %language, %category, "calling AI Foundry");

        let resp = self
            .client
            .post(&url)
            .header("api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Remote(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(CompletionError::Remote(format!("returned {status}: {text}")));
        }

        let parsed: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| CompletionError::Remote(format!("failed to parse response: {e}")))?;

        extract_reply(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_fixed_sampling_parameters() {
        let req = build_request("gpt-35-turbo", "Hi", "en", "general");
        assert_eq!(req.model, "gpt-35-turbo");
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, "system");
        assert_eq!(req.messages[1].role, "user");
        assert_eq!(req.messages[1].content, "Hi");
        assert_eq!(req.temperature, 0.7);
        assert_eq!(req.top_p, 0.95);
        assert_eq!(req.max_tokens, 200);
    }

    #[test]
    fn reply_extraction_trims_whitespace() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"  Hello!  "}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_reply(parsed).unwrap(), "Hello!");
    }

    #[test]
    fn empty_choices_is_a_remote_failure() {
        let parsed: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            extract_reply(parsed),
            Err(CompletionError::Remote(_))
        ));
    }

    #[tokio::test]
    async fn unconfigured_client_fails_without_network() {
        let client = FoundryClient::from_config(&Config::default());
        let err = client.complete("hello", "en", "general").await.unwrap_err();
        assert!(matches!(err, CompletionError::NotConfigured));
    }
}
