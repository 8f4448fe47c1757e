use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::handlers;

/// Create the REST router: `POST /chat` and `GET /health`.
pub fn create_rest_router(state: AppState, root_path: &str) -> Router {
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .with_state(state);

    finish(app, root_path)
}

/// Create the MCP router: JSON-RPC on `POST /mcp` and `GET /health`.
///
/// Only `/mcp` sits behind the bearer check so liveness checks stay open.
pub fn create_mcp_router(state: AppState, root_path: &str) -> Router {
    let mcp = Router::new()
        .route("/mcp", post(handlers::mcp_request))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::require_bearer,
        ));

    let app = Router::new()
        .route("/health", get(handlers::mcp_health))
        .merge(mcp)
        .with_state(state);

    finish(app, root_path)
}

fn finish(app: Router, root_path: &str) -> Router {
    // CORS: allow any origin (browser playgrounds and MCP clients run anywhere)
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Served both bare and under the prefix, so `/health` answers either way.
    match normalize_root_path(root_path) {
        Some(root) => app.clone().nest(&root, app),
        None => app,
    }
}

/// Turn a configured root path into a nest prefix, or `None` for the root.
fn normalize_root_path(root_path: &str) -> Option<String> {
    let trimmed = root_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{trimmed}"))
    }
}
