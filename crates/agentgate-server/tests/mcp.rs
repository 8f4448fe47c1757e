use std::sync::Arc;
use std::time::Duration;

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use agentgate_core::AgentCapability;
use agentgate_server::app_state::AppState;
use agentgate_server::router::create_mcp_router;

use mock_agents::{FailingAgent, GatedAgent, RecordingAgent};

fn build_test_app(agent: Arc<dyn AgentCapability>) -> TestServer {
    let app = create_mcp_router(AppState::new(agent), "");
    TestServer::new(app).unwrap()
}

fn call_tool(query: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 7,
        "method": "tools/call",
        "params": {
            "name": "conduct_research_and_report",
            "arguments": { "query": query }
        }
    })
}

#[tokio::test]
async fn health_check() {
    let agent = Arc::new(RecordingAgent::new());
    let server = build_test_app(agent.clone());

    let resp = server.get("/health").await;
    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["name"], "research_report_generation");
    assert_eq!(agent.calls(), 0);
}

#[tokio::test]
async fn mcp_initialize() {
    let server = build_test_app(Arc::new(RecordingAgent::new()));

    let resp = server
        .post("/mcp")
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": { "protocolVersion": "2024-11-05" }
        }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["result"]["serverInfo"]["name"], "research_report_generation");
    assert_eq!(body["result"]["protocolVersion"], "2024-11-05");
    assert!(body["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn mcp_tools_list_has_single_tool() {
    let server = build_test_app(Arc::new(RecordingAgent::new()));

    let resp = server
        .post("/mcp")
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/list",
            "params": {}
        }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    let tools = body["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "conduct_research_and_report");
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["query"]));
}

#[tokio::test]
async fn tool_call_passes_agent_output_through() {
    let agent = Arc::new(RecordingAgent::new());
    let server = build_test_app(agent.clone());

    let resp = server.post("/mcp").json(&call_tool("AI regulation 2025")).await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["id"], 7);
    assert!(body.get("error").is_none());

    let result = &body["result"];
    assert_eq!(result["isError"], false);
    let content = result["content"].as_array().unwrap();
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["type"], "text");

    let direct = agent.run("AI regulation 2025").await.unwrap();
    assert_eq!(content[0]["text"], direct.as_str());
    assert_eq!(agent.calls(), 2);
}

#[tokio::test]
async fn tool_failure_uses_is_error() {
    let agent = Arc::new(FailingAgent::new());
    let server = build_test_app(agent.clone());

    let resp = server.post("/mcp").json(&call_tool("AI regulation 2025")).await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["result"]["isError"], true);
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Tool Execution Error"));
    assert!(text.contains("upstream model timed out"));
    assert_eq!(agent.calls(), 1);
}

#[tokio::test]
async fn tool_call_with_bad_arguments_is_invalid_params() {
    let agent = Arc::new(RecordingAgent::new());
    let server = build_test_app(agent.clone());

    let requests = [
        call_tool("   "),
        json!({
            "jsonrpc": "2.0", "id": 2, "method": "tools/call",
            "params": { "name": "conduct_research_and_report", "arguments": {} }
        }),
        json!({
            "jsonrpc": "2.0", "id": 3, "method": "tools/call",
            "params": { "name": "list_agents", "arguments": { "query": "x" } }
        }),
        json!({ "jsonrpc": "2.0", "id": 4, "method": "tools/call" }),
    ];
    for req in requests {
        let resp = server.post("/mcp").json(&req).await;
        resp.assert_status_ok();
        let body: Value = resp.json();
        assert_eq!(body["error"]["code"], -32602, "{req}");
    }
    assert_eq!(agent.calls(), 0);
}

#[tokio::test]
async fn mcp_unknown_method() {
    let server = build_test_app(Arc::new(RecordingAgent::new()));

    let resp = server
        .post("/mcp")
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "nonexistent/method",
            "params": {}
        }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32601);
}

#[tokio::test]
async fn mcp_ping_returns_empty_result() {
    let agent = Arc::new(RecordingAgent::new());
    let server = build_test_app(agent.clone());

    let resp = server
        .post("/mcp")
        .json(&json!({ "jsonrpc": "2.0", "id": "p-1", "method": "ping" }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["id"], "p-1");
    assert_eq!(body["result"], json!({}));
    assert!(body.get("error").is_none());
    assert_eq!(agent.calls(), 0);
}

#[tokio::test]
async fn mcp_unknown_resource_is_invalid_params() {
    let server = build_test_app(Arc::new(RecordingAgent::new()));

    let resp = server
        .post("/mcp")
        .json(&json!({
            "jsonrpc": "2.0", "id": 5, "method": "resources/read",
            "params": { "uri": "config://nope" }
        }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["id"], 5);
    assert_eq!(body["error"]["code"], -32602);
    assert!(body.get("result").is_none());
}

#[tokio::test]
async fn mcp_missing_method_is_invalid_request() {
    let server = build_test_app(Arc::new(RecordingAgent::new()));

    let resp = server
        .post("/mcp")
        .json(&json!({ "jsonrpc": "2.0", "id": 9, "params": {} }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32600);
    assert_eq!(body["id"], 9);
}

#[tokio::test]
async fn mcp_malformed_body_is_parse_error() {
    let server = build_test_app(Arc::new(RecordingAgent::new()));

    let resp = server.post("/mcp").text("{not json").await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32700);
    assert!(body["id"].is_null());
}

#[tokio::test]
async fn mcp_notification_returns_accepted() {
    let server = build_test_app(Arc::new(RecordingAgent::new()));

    let resp = server
        .post("/mcp")
        .json(&json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        }))
        .await;

    resp.assert_status(StatusCode::ACCEPTED);
    assert!(resp.text().is_empty());
}

#[tokio::test]
async fn null_id_is_treated_as_notification() {
    let agent = Arc::new(RecordingAgent::new());
    let server = build_test_app(agent.clone());

    let resp = server
        .post("/mcp")
        .json(&json!({
            "jsonrpc": "2.0",
            "id": null,
            "method": "tools/call",
            "params": {
                "name": "conduct_research_and_report",
                "arguments": { "query": "ignored" }
            }
        }))
        .await;

    resp.assert_status(StatusCode::ACCEPTED);
    assert!(resp.text().is_empty());
    assert_eq!(agent.calls(), 0);
}

#[tokio::test]
async fn mcp_get_is_not_allowed() {
    let server = build_test_app(Arc::new(RecordingAgent::new()));

    server
        .get("/mcp")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn server_info_resource() {
    let state = AppState::new(Arc::new(RecordingAgent::new()))
        .with_report_path(Some("research_report.md".to_string()));
    let server = TestServer::new(create_mcp_router(state, "")).unwrap();

    let listed: Value = server
        .post("/mcp")
        .json(&json!({ "jsonrpc": "2.0", "id": 1, "method": "resources/list" }))
        .await
        .json();
    assert_eq!(listed["result"]["resources"][0]["uri"], "config://server-info");

    let read: Value = server
        .post("/mcp")
        .json(&json!({
            "jsonrpc": "2.0", "id": 2, "method": "resources/read",
            "params": { "uri": "config://server-info" }
        }))
        .await
        .json();
    let text = read["result"]["contents"][0]["text"].as_str().unwrap();
    let info: Value = serde_json::from_str(text).unwrap();
    assert_eq!(info["server_name"], "research_report_generation");
    assert_eq!(info["output_file"], "research_report.md");
}

#[tokio::test]
async fn health_responds_while_tool_call_is_in_flight() {
    let agent = Arc::new(GatedAgent::new());
    let server = build_test_app(agent.clone());

    let call = async { server.post("/mcp").json(&call_tool("slow query")).await };

    let check_health = async {
        agent.started.notified().await;

        let health = tokio::time::timeout(Duration::from_secs(5), async {
            server.get("/health").await
        })
        .await
        .expect("health check blocked by in-flight tool call");
        health.assert_status_ok();

        agent.release.notify_one();
    };

    let (call_resp, ()) = tokio::join!(call, check_health);
    let body: Value = call_resp.json();
    assert_eq!(body["result"]["content"][0]["text"], "# Slow report: slow query\n");
}

#[tokio::test]
async fn bearer_token_guards_mcp_but_not_health() {
    let state = AppState::new(Arc::new(RecordingAgent::new()))
        .with_auth_token(Some("s3cret".to_string()));
    let server = TestServer::new(create_mcp_router(state, "")).unwrap();

    let list = json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" });

    server
        .post("/mcp")
        .json(&list)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .post("/mcp")
        .authorization_bearer("wrong")
        .json(&list)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .post("/mcp")
        .authorization_bearer("s3cret")
        .json(&list)
        .await
        .assert_status_ok();

    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn bearer_scheme_is_case_insensitive() {
    let state = AppState::new(Arc::new(RecordingAgent::new()))
        .with_auth_token(Some("s3cret".to_string()));
    let server = TestServer::new(create_mcp_router(state, "")).unwrap();

    let list = json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" });

    server
        .post("/mcp")
        .add_header(AUTHORIZATION, HeaderValue::from_static("bearer s3cret"))
        .json(&list)
        .await
        .assert_status_ok();

    server
        .post("/mcp")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Basic s3cret"))
        .json(&list)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn routes_nest_under_root_path() {
    let state = AppState::new(Arc::new(RecordingAgent::new()));
    let server = TestServer::new(create_mcp_router(state, "/svc")).unwrap();

    server.get("/svc/health").await.assert_status_ok();
    server.get("/health").await.assert_status_ok();

    let body: Value = server
        .post("/svc/mcp")
        .json(&json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }))
        .await
        .json();
    assert_eq!(body["result"]["tools"][0]["name"], "conduct_research_and_report");
}
