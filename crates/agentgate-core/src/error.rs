/// Core error type for the agentgate system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller sent a request that fails schema or content checks.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The agent run failed (model, search or network error upstream).
    #[error("agent execution failed: {0}")]
    Capability(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error was caused by the caller rather than the server.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
