use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::RESEARCH_TOOL;
use crate::SERVER_NAME;

pub const SERVER_INFO_URI: &str = "config://server-info";

/// Definition of a read-only MCP resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub uri: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// Static resources describing this server.
pub struct ResourceRegistry;

impl ResourceRegistry {
    #[must_use]
    pub fn definitions() -> Vec<ResourceDefinition> {
        vec![ResourceDefinition {
            uri: SERVER_INFO_URI.to_string(),
            name: "server-info".to_string(),
            description: "Configuration details about this MCP server and its capabilities."
                .to_string(),
            mime_type: "application/json".to_string(),
        }]
    }

    /// Contents for `resources/read`, or `None` for an unknown URI.
    /// `output_file` is where reports are saved, if anywhere.
    #[must_use]
    pub fn read(uri: &str, output_file: Option<&str>) -> Option<Value> {
        if uri != SERVER_INFO_URI {
            return None;
        }

        let info = serde_json::json!({
            "server_name": SERVER_NAME,
            "description": "Exposes the research and report generation agent.",
            "tools": [RESEARCH_TOOL],
            "tool_flow": "WebSearch -> LLM Summary -> LLM Report",
            "output_file": output_file,
        });

        Some(serde_json::json!({
            "contents": [{
                "uri": SERVER_INFO_URI,
                "mimeType": "application/json",
                "text": info.to_string(),
            }]
        }))
    }
}
