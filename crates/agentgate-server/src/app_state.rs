use std::sync::Arc;

use agentgate_core::AgentCapability;

/// Shared application state with injected dependencies.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<dyn AgentCapability>,
    /// Bearer token required on the MCP endpoint. `None` leaves it open.
    pub auth_token: Option<Arc<str>>,
    /// File the agent saves reports to, reported by the server-info resource.
    pub report_path: Option<Arc<str>>,
}

impl AppState {
    pub fn new(agent: Arc<dyn AgentCapability>) -> Self {
        Self {
            agent,
            auth_token: None,
            report_path: None,
        }
    }

    #[must_use]
    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token.filter(|t| !t.is_empty()).map(Arc::from);
        self
    }

    #[must_use]
    pub fn with_report_path(mut self, path: Option<String>) -> Self {
        self.report_path = path.map(Arc::from);
        self
    }
}
