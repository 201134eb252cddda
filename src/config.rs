// src/config.rs
use std::env;

/// Process configuration, read from the environment once at startup and
/// immutable afterwards. Missing AI Foundry credentials are a valid state:
/// the chat endpoint then serves fallback text instead of failing to boot.
#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub deployment: String,
    pub port: u16,
    pub verbose_errors: bool,
}

const DEFAULT_DEPLOYMENT: &str = "gpt-35-turbo";
const DEFAULT_PORT: u16 = 5000;

fn non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            endpoint: non_empty("AI_FOUNDRY_ENDPOINT"),
            api_key: non_empty("AI_FOUNDRY_KEY"),
            deployment: non_empty("AI_FOUNDRY_DEPLOYMENT")
                .unwrap_or_else(|| DEFAULT_DEPLOYMENT.to_string()),
            port: non_empty("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            verbose_errors: non_empty("APP_ENV").as_deref() == Some("development"),
        }
    }

    /// True when both endpoint and key are present.
    pub fn remote_configured(&self) -> bool {
        self.endpoint.is_some() && self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            deployment: DEFAULT_DEPLOYMENT.to_string(),
            port: DEFAULT_PORT,
            verbose_errors: false,
        }
    }
}
