//! NewsAPI search client.
//!
//! The fetch is split in two layers: [`NewsClient::search`] classifies the
//! response without printing anything, and [`NewsClient::fetch_news`]
//! reports the outcome and collapses every failure into an empty list.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};
use urlencoding::encode;

use crate::config::Settings;

/// Language filter sent with every search.
pub const LANGUAGE: &str = "pt";
/// Sort order sent with every search (most recent first).
pub const SORT_BY: &str = "publishedAt";

/// Article as returned by the API. Only `title`, `source.name` and `url`
/// are consumed downstream; the rest is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Outer JSON structure of a search response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Classified result of a successful HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Articles(Vec<Article>),
    Empty,
    ApiError(String),
}

/// Failures below the envelope level.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {status}")]
    Http { status: StatusCode, body: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decide what a decoded envelope means for the pipeline.
pub fn classify_envelope(envelope: Envelope) -> FetchOutcome {
    if envelope.status != "ok" {
        let message = envelope
            .message
            .unwrap_or_else(|| "unknown error".to_string());
        return FetchOutcome::ApiError(message);
    }
    if envelope.total_results == 0 {
        return FetchOutcome::Empty;
    }
    FetchOutcome::Articles(envelope.articles)
}

/// Thin wrapper around a `reqwest` client bound to one search endpoint.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    endpoint: String,
}

impl NewsClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        Self::with_endpoint(settings.news_api_url.clone())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("news-sentiment/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    fn search_url(&self, api_key: &str, query: &str) -> String {
        format!(
            "{base}?q={query}&language={language}&sortBy={sort_by}&apiKey={key}",
            base = self.endpoint,
            query = encode(query),
            language = LANGUAGE,
            sort_by = SORT_BY,
            key = encode(api_key),
        )
    }

    /// Issue the search and classify the response, without reporting.
    pub async fn search(&self, api_key: &str, query: &str) -> Result<FetchOutcome, FetchError> {
        let resp = self.http.get(self.search_url(api_key, query)).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(FetchError::Http { status, body });
        }
        let envelope: Envelope = serde_json::from_str(&body)?;
        Ok(classify_envelope(envelope))
    }

    /// Fetch articles for `query`, reporting progress and degrading every
    /// failure to an empty list.
    pub async fn fetch_news(&self, api_key: &str, query: &str) -> Vec<Article> {
        info!(%query, "searching news");
        match self.search(api_key, query).await {
            Ok(FetchOutcome::Articles(articles)) => {
                info!(count = articles.len(), "found articles");
                articles
            }
            Ok(FetchOutcome::Empty) => {
                info!("no articles found for this search");
                Vec::new()
            }
            Ok(FetchOutcome::ApiError(message)) => {
                warn!(%message, "API error");
                Vec::new()
            }
            Err(FetchError::Http { status, body }) => {
                error!(%status, %body, "HTTP error");
                Vec::new()
            }
            Err(err) => {
                error!(%err, "an error occurred");
                Vec::new()
            }
        }
    }
}
