//! Web search collaborator.
//!
//! The pipeline only sees [`SearchClient`]; [`TavilySearch`] is the hosted
//! implementation used in production.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;
use crate::http_client::CLIENT;

/// One snippet returned for a search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
}

impl SearchResult {
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        SearchResult {
            title: String::new(),
            url: url.into(),
            content: content.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Runs `query` and returns at most `max_results` snippets.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>, ProviderError>;
}

#[derive(Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
    search_depth: &'a str,
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

pub struct TavilySearch {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TavilySearch {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        TavilySearch {
            client: CLIENT.clone(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SearchClient for TavilySearch {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>, ProviderError> {
        let body = TavilyRequest {
            api_key: &self.api_key,
            query,
            max_results,
            search_depth: "advanced",
        };

        let res = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let message = res.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: TavilyResponse = res
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Tavily response: {}", e)))?;

        let mut results = parsed.results;
        results.truncate(max_results);
        debug!(count = results.len(), "search returned results");
        Ok(results)
    }
}
