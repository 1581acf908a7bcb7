//! Runtime configuration utilities for news-sentiment.

use std::env;

use serde::Deserialize;
use thiserror::Error;

/// NewsAPI search endpoint queried by the `analyze` command.
pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// Errors raised while resolving configuration a command depends on.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not found. Check that a .env file exists and defines NEWS_API_KEY.")]
    MissingApiKey,
}

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// NewsAPI credential; `None` when unset or blank.
    pub news_api_key: Option<String>,
    /// Search endpoint, overridable for local testing.
    pub news_api_url: String,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let news_api_key = env::var("NEWS_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let news_api_url =
            env::var("NEWS_API_URL").unwrap_or_else(|_| DEFAULT_NEWS_API_URL.to_string());

        Ok(Self {
            news_api_key,
            news_api_url,
        })
    }

    /// Return the credential or fail before any work is attempted.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.news_api_key
            .as_deref()
            .ok_or(ConfigError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_a_config_error() {
        let settings = Settings {
            news_api_key: None,
            news_api_url: DEFAULT_NEWS_API_URL.to_string(),
        };
        let err = settings.require_api_key().unwrap_err();
        assert!(err.to_string().contains("NEWS_API_KEY"));
    }

    #[test]
    fn present_key_is_returned() {
        let settings = Settings {
            news_api_key: Some("secret".into()),
            news_api_url: DEFAULT_NEWS_API_URL.to_string(),
        };
        assert_eq!(settings.require_api_key().unwrap(), "secret");
    }
}
