use reqwest::Client;
use serde_json::Value;

use agentgate_mcp::tools::RESEARCH_TOOL;

/// Minimal JSON-RPC caller for the MCP adapter.
pub struct McpClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
    next_id: u64,
}

impl McpClient {
    pub fn new(url: &str, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{url}/mcp"),
            token,
            next_id: 1,
        }
    }

    async fn call(&mut self, method: &str, params: Value) -> anyhow::Result<Value> {
        let id = self.next_id;
        self.next_id += 1;

        let mut req = self.client.post(&self.endpoint).json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        }));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await?;
            anyhow::bail!("MCP request failed ({status}): {body}");
        }

        let body: Value = resp.json().await?;
        if let Some(error) = body.get("error") {
            anyhow::bail!("MCP error: {}", serde_json::to_string_pretty(error)?);
        }
        Ok(body.get("result").cloned().unwrap_or(Value::Null))
    }

    /// Print the tools the server advertises.
    pub async fn list_tools(&mut self) -> anyhow::Result<()> {
        let result = self.call("tools/list", serde_json::json!({})).await?;
        println!("{}", serde_json::to_string_pretty(&result["tools"])?);
        Ok(())
    }

    /// Run the research tool and print its text output.
    pub async fn research(&mut self, query: &str) -> anyhow::Result<()> {
        let result = self
            .call(
                "tools/call",
                serde_json::json!({
                    "name": RESEARCH_TOOL,
                    "arguments": { "query": query },
                }),
            )
            .await?;

        let text = result["content"][0]["text"].as_str().unwrap_or_default();
        if result["isError"].as_bool().unwrap_or(false) {
            anyhow::bail!("{text}");
        }
        println!("{text}");
        Ok(())
    }
}
