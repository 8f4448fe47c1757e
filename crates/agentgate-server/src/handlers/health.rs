use axum::Json;
use serde_json::{json, Value};

use agentgate_mcp::SERVER_NAME;

/// Liveness check for the REST surface. Never touches the agent.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

/// Liveness check for the MCP surface, reporting the server name.
pub async fn mcp_health() -> Json<Value> {
    Json(json!({ "status": "OK", "name": SERVER_NAME }))
}
