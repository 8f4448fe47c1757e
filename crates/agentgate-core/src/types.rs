use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Markdown report produced by an agent run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report(pub String);

impl Report {
    #[must_use]
    pub fn new(markdown: impl Into<String>) -> Self {
        Self(markdown.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Report {
    fn from(markdown: String) -> Self {
        Self(markdown)
    }
}

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_input: String,
}

impl ChatRequest {
    /// Check the request and hand back the query to run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `user_input` is empty or only
    /// whitespace.
    pub fn into_query(self) -> Result<String, Error> {
        require_query("user_input", self.user_input)
    }
}

/// Reject blank query strings. `field` names the offending input in the
/// error message.
///
/// # Errors
///
/// Returns [`Error::Validation`] when `value` is empty after trimming.
pub fn require_query(field: &str, value: String) -> Result<String, Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("'{field}' must not be empty")));
    }
    Ok(value)
}

/// Response body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub result: String,
}

impl From<Report> for ChatResponse {
    fn from(report: Report) -> Self {
        Self {
            result: report.into_inner(),
        }
    }
}

/// Error payload returned by the REST surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
