//! Wire types for the tool-serving endpoint: JSON-RPC 2.0 envelopes, the
//! single research tool and the server-info resource.

pub mod jsonrpc;
pub mod resources;
pub mod tools;

pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use resources::{ResourceDefinition, ResourceRegistry};
pub use tools::{CallToolResult, ToolDefinition, ToolRegistry};

/// Name the server reports in `initialize` and on `/health`.
pub const SERVER_NAME: &str = "research_report_generation";

/// Protocol revisions this server can speak, newest first.
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2025-03-26", "2024-11-05"];

/// Pick the protocol version to answer `initialize` with: the client's
/// requested version if supported, otherwise the newest one we know.
#[must_use]
pub fn negotiate_protocol_version(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|v| SUPPORTED_PROTOCOL_VERSIONS.iter().find(|s| **s == v))
        .copied()
        .unwrap_or(SUPPORTED_PROTOCOL_VERSIONS[0])
}
