use reqwest::Client;
use serde::Serialize;

use agentgate_core::{Error, GatewayConfig};

/// One chat message in an OpenAI-style completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Minimal client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(http: Client, config: &GatewayConfig) -> Self {
        Self {
            http,
            base_url: config.gateway_base().to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a system + user prompt and return the assistant's text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Capability`] on transport failure, a non-success
    /// status, or a response without message content.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, Error> {
        let messages = [
            ChatMessage {
                role: "system",
                content: system,
            },
            ChatMessage {
                role: "user",
                content: user,
            },
        ];

        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": self.model,
                "messages": messages,
            }))
            .send()
            .await
            .map_err(|e| Error::Capability(format!("gateway request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Capability(format!(
                "gateway returned {status}: {body}"
            )));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| Error::Capability(format!("invalid gateway response: {e}")))?;

        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(Error::Capability(
                "gateway response had no message content".to_string(),
            ));
        }

        tracing::debug!(model = %self.model, len = content.len(), "completion received");
        Ok(content.to_string())
    }
}
