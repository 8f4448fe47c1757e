use async_trait::async_trait;

use agentgate_core::{AgentCapability, Error, Report};

/// Answers every query with a fixed Markdown echo. Used for local runs
/// without gateway credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoAgent;

#[async_trait]
impl AgentCapability for EchoAgent {
    async fn run(&self, query: &str) -> Result<Report, Error> {
        Ok(Report::new(format!("# Report\n\n- Echo: {query}\n")))
    }

    fn name(&self) -> &str {
        "echo"
    }
}
