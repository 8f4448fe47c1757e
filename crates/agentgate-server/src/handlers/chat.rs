use axum::{extract::rejection::JsonRejection, extract::State, Json};
use uuid::Uuid;

use agentgate_core::{ChatRequest, ChatResponse, Error};

use crate::app_state::AppState;
use crate::error::ApiError;

/// Run the agent on `user_input` and return its report.
///
/// Body problems are rejected before the agent is called.
#[allow(clippy::missing_errors_doc)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| Error::Validation(e.body_text()))?;
    let query = req.into_query()?;

    let trace_id = Uuid::new_v4();
    tracing::info!(
        trace_id = %trace_id,
        agent = state.agent.name(),
        query_len = query.len(),
        "Processing chat request"
    );

    let report = state.agent.run(&query).await.map_err(|e| {
        tracing::error!(trace_id = %trace_id, error = %e, "Agent run failed");
        e
    })?;

    tracing::info!(trace_id = %trace_id, report_len = report.as_str().len(), "Chat request complete");
    Ok(Json(report.into()))
}
