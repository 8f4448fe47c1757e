use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;

use agentgate_core::{AgentCapability, Error, GatewayConfig, Report};

use crate::llm::LlmClient;
use crate::prompts::{report_task, research_task, RESEARCHER, WRITER};
use crate::search::{format_sources, SearchClient};

/// Sequential researcher -> writer pipeline.
///
/// The researcher searches the web and summarizes what it found; the writer
/// turns that summary into the Markdown report that is returned.
#[derive(Debug, Clone)]
pub struct ResearchCrew {
    llm: LlmClient,
    search: SearchClient,
    report_path: Option<PathBuf>,
}

impl ResearchCrew {
    /// Build the pipeline from validated gateway settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the settings are incomplete or the HTTP
    /// client cannot be built.
    pub fn new(config: &GatewayConfig) -> Result<Self, Error> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            llm: LlmClient::new(http.clone(), config),
            search: SearchClient::new(http, config),
            report_path: config.report_path.clone(),
        })
    }

    async fn research(&self, query: &str) -> Result<String, Error> {
        let hits = self.search.search(query).await?;
        tracing::info!(hits = hits.len(), "researcher gathered sources");

        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let task = research_task(query, &today, &format_sources(&hits));
        self.llm.complete(&RESEARCHER.system_prompt(), &task).await
    }

    async fn write_report(&self, query: &str, summary: &str) -> Result<Report, Error> {
        let markdown = self
            .llm
            .complete(&WRITER.system_prompt(), &report_task(query, summary))
            .await?;
        Ok(Report::new(markdown))
    }

    async fn save(&self, report: &Report) -> Result<(), Error> {
        let Some(path) = &self.report_path else {
            return Ok(());
        };
        tokio::fs::write(path, report.as_str()).await.map_err(|e| {
            Error::Capability(format!(
                "failed to write report to {}: {e}",
                path.display()
            ))
        })?;
        tracing::info!(path = %path.display(), "report saved");
        Ok(())
    }
}

#[async_trait]
impl AgentCapability for ResearchCrew {
    async fn run(&self, query: &str) -> Result<Report, Error> {
        tracing::info!(model = %self.llm.model(), query_len = query.len(), "starting research crew");

        let summary = self.research(query).await?;
        let report = self.write_report(query, &summary).await?;
        self.save(&report).await?;

        Ok(report)
    }

    fn name(&self) -> &str {
        "research-crew"
    }
}
