use async_trait::async_trait;

use crate::error::Error;
use crate::types::Report;

/// A single agent operation: research a query and return a Markdown report.
///
/// Adapters hold an `Arc<dyn AgentCapability>` and never know which agent
/// backend sits behind it.
#[async_trait]
pub trait AgentCapability: Send + Sync {
    /// Run the agent for `query`. The query is non-empty; content is not
    /// otherwise constrained.
    async fn run(&self, query: &str) -> Result<Report, Error>;

    /// Short backend name used in logs.
    fn name(&self) -> &str;
}
