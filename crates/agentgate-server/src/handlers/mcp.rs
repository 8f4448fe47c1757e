use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use agentgate_mcp::jsonrpc::{INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND};
use agentgate_mcp::{
    negotiate_protocol_version, CallToolResult, JsonRpcRequest, JsonRpcResponse,
    ResourceRegistry, ToolRegistry, SERVER_NAME,
};

use crate::app_state::AppState;

/// Handle MCP JSON-RPC requests (stateless Streamable HTTP).
///
/// Each request is answered in the response body. Notifications get
/// `202 Accepted` with no body.
pub async fn mcp_request(State(state): State<AppState>, body: Bytes) -> Response {
    let req = match JsonRpcRequest::parse(&body) {
        Ok(req) => req,
        Err(response) => {
            tracing::warn!("Rejected malformed MCP request");
            return Json(*response).into_response();
        }
    };

    if req.is_notification() {
        tracing::debug!("Received MCP notification: {}", req.method);
        return StatusCode::ACCEPTED.into_response();
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "ping" => JsonRpcResponse::success(req.id.clone(), serde_json::json!({})),
        "tools/list" => handle_tools_list(&req),
        "tools/call" => handle_tools_call(&state, &req).await,
        "resources/list" => handle_resources_list(&req),
        "resources/read" => handle_resources_read(&state, &req),
        _ => JsonRpcResponse::error(req.id.clone(), METHOD_NOT_FOUND, "Method not found"),
    };

    Json(response).into_response()
}

fn handle_initialize(req: &JsonRpcRequest) -> JsonRpcResponse {
    let requested = req
        .params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str);

    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({
            "protocolVersion": negotiate_protocol_version(requested),
            "capabilities": {
                "tools": {},
                "resources": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(req: &JsonRpcRequest) -> JsonRpcResponse {
    let tools = ToolRegistry::definitions();
    JsonRpcResponse::success(req.id.clone(), serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    let query = match ToolRegistry::parse_call(req.params.as_ref()) {
        Ok(query) => query,
        Err(err) => return JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, err.to_string()),
    };

    let trace_id = Uuid::new_v4();
    tracing::info!(
        trace_id = %trace_id,
        agent = state.agent.name(),
        query_len = query.len(),
        "Running research tool"
    );

    let result = match state.agent.run(&query).await {
        Ok(report) => CallToolResult::text(report.into_inner()),
        Err(err) => {
            tracing::error!(trace_id = %trace_id, error = %err, "Research tool failed");
            CallToolResult::failure(&err)
        }
    };

    match serde_json::to_value(&result) {
        Ok(value) => JsonRpcResponse::success(req.id.clone(), value),
        Err(err) => JsonRpcResponse::error(req.id.clone(), INTERNAL_ERROR, err.to_string()),
    }
}

fn handle_resources_list(req: &JsonRpcRequest) -> JsonRpcResponse {
    let resources = ResourceRegistry::definitions();
    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({ "resources": resources }),
    )
}

fn handle_resources_read(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    let uri = req
        .params
        .as_ref()
        .and_then(|p| p.get("uri"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    match ResourceRegistry::read(uri, state.report_path.as_deref()) {
        Some(contents) => JsonRpcResponse::success(req.id.clone(), contents),
        None => JsonRpcResponse::error(
            req.id.clone(),
            INVALID_PARAMS,
            format!("Unknown resource: {uri}"),
        ),
    }
}
