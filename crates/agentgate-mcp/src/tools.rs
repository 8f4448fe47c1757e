use serde::{Deserialize, Serialize};
use serde_json::Value;

use agentgate_core::types::require_query;
use agentgate_core::Error;

/// Name of the one tool this server exposes.
pub const RESEARCH_TOOL: &str = "conduct_research_and_report";

/// Prefix put in front of the failure text when a tool run fails.
pub const TOOL_ERROR_PREFIX: &str = "Tool Execution Error: Could not complete the workflow.";

/// Definition of an MCP tool exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// A single piece of tool output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Result of `tools/call`. Failures are reported in-band with `isError`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolResult {
    pub content: Vec<TextContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl CallToolResult {
    /// Successful run: the text is passed through unchanged.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent {
                kind: "text".to_string(),
                text: text.into(),
            }],
            is_error: false,
        }
    }

    /// Failed run, reported through the protocol's tool-error flag.
    pub fn failure(details: impl std::fmt::Display) -> Self {
        Self {
            content: vec![TextContent {
                kind: "text".to_string(),
                text: format!("{TOOL_ERROR_PREFIX} Details: {details}"),
            }],
            is_error: true,
        }
    }
}

/// Registry of the tools available on this server.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Return the list of tool definitions for the MCP `tools/list` method.
    #[must_use]
    pub fn definitions() -> Vec<ToolDefinition> {
        vec![ToolDefinition {
            name: RESEARCH_TOOL.to_string(),
            description: "Executes a two-agent workflow to perform real-time web research and \
                          generate a detailed report in Markdown format. Returns the full \
                          content of the generated report."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The research topic (e.g., \"Latest developments in quantum computing hardware\")"
                    }
                },
                "required": ["query"]
            }),
        }]
    }

    /// Resolve `tools/call` params to the query to research.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for missing params, an unknown tool
    /// name, or a missing, non-string or blank `query`.
    pub fn parse_call(params: Option<&Value>) -> Result<String, Error> {
        let params = params.ok_or_else(|| Error::Validation("Missing params".to_string()))?;

        let tool_name = params
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if tool_name != RESEARCH_TOOL {
            return Err(Error::Validation(format!("Unknown tool: {tool_name}")));
        }

        let query = params
            .get("arguments")
            .and_then(|args| args.get("query"))
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Validation("Missing 'query' parameter".to_string()))?;

        require_query("query", query.to_string())
    }
}
