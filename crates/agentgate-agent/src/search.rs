use std::fmt::Write as _;

use reqwest::Client;
use serde::Deserialize;

use agentgate_core::{Error, GatewayConfig};

/// One web search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// Client for a Tavily-compatible `POST /search` API.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: String,
    api_key: String,
    max_results: u32,
}

impl SearchClient {
    #[must_use]
    pub fn new(http: Client, config: &GatewayConfig) -> Self {
        Self {
            http,
            base_url: config.search_base().to_string(),
            api_key: config.search_api_key.clone(),
            max_results: config.max_results,
        }
    }

    /// Run an advanced-depth search for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Capability`] on transport failure, a non-success
    /// status, or an unparseable body.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, Error> {
        let resp = self
            .http
            .post(format!("{}/search", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "query": query,
                "search_depth": "advanced",
                "max_results": self.max_results,
            }))
            .send()
            .await
            .map_err(|e| Error::Capability(format!("search request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Capability(format!(
                "search returned {status}: {body}"
            )));
        }

        let parsed: SearchResponse = resp
            .json()
            .await
            .map_err(|e| Error::Capability(format!("invalid search response: {e}")))?;

        tracing::debug!(hits = parsed.results.len(), "search complete");
        Ok(parsed.results)
    }
}

/// Longest snippet, in characters, quoted per source.
const SNIPPET_CHARS: usize = 300;

/// Render hits as a numbered, cited source list for the researcher prompt.
#[must_use]
pub fn format_sources(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No search results were found.".to_string();
    }

    let mut out = String::new();
    for (i, hit) in hits.iter().enumerate() {
        let _ = writeln!(out, "[{}] {} ({})", i + 1, hit.title, hit.url);
        let snippet: String = hit.content.trim().chars().take(SNIPPET_CHARS).collect();
        if !snippet.is_empty() {
            let _ = writeln!(out, "    {snippet}");
        }
    }
    out
}
