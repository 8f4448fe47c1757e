use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;

use agentgate_agent::{EchoAgent, ResearchCrew};
use agentgate_core::config::{DEFAULT_MAX_RESULTS, DEFAULT_MODEL, DEFAULT_SEARCH_URL};
use agentgate_core::{AgentCapability, Error, GatewayConfig};

/// Where the server listens.
#[derive(Debug, Clone, Args)]
pub struct ListenArgs {
    /// Interface to bind (all interfaces by default, for containers)
    #[arg(long, env = "AGENTGATE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "AGENTGATE_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Path prefix all routes are served under (set by the hosting platform)
    #[arg(long, env = "TFY_SERVICE_ROOT_PATH", default_value = "")]
    pub root_path: String,
}

impl ListenArgs {
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which agent backend to run and how to reach its upstreams.
#[derive(Clone, Args)]
pub struct AgentArgs {
    /// OpenAI-compatible gateway base URL
    #[arg(long, env = "LLM_GATEWAY_URL")]
    pub gateway_url: Option<String>,

    /// Gateway API key
    #[arg(long, env = "TFY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model name as routed by the gateway
    #[arg(long, env = "LLM_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Search API base URL
    #[arg(long, env = "TAVILY_BASE_URL", default_value = DEFAULT_SEARCH_URL)]
    pub search_url: String,

    /// Search API key
    #[arg(long, env = "TAVILY_API_KEY", hide_env_values = true)]
    pub search_api_key: Option<String>,

    /// Number of search results the researcher reads
    #[arg(long, env = "SEARCH_MAX_RESULTS", default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: u32,

    /// Also write each finished report to this file
    #[arg(long, env = "REPORT_OUTPUT_PATH")]
    pub report_path: Option<PathBuf>,

    /// Timeout in seconds for each gateway or search call
    #[arg(long, env = "LLM_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Run the offline echo agent instead. Also enabled by `AGENT_MODE=mock`.
    #[arg(long)]
    pub mock: bool,
}

impl AgentArgs {
    fn is_mock(&self) -> bool {
        self.mock
            || std::env::var("AGENT_MODE")
                .map(|v| v.eq_ignore_ascii_case("mock"))
                .unwrap_or(false)
    }

    /// Assemble the gateway settings from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a required setting is missing or blank.
    pub fn gateway_config(&self) -> Result<GatewayConfig, Error> {
        let required = |value: &Option<String>, name: &str| {
            value
                .clone()
                .ok_or_else(|| Error::Config(format!("{name} is required unless --mock is set")))
        };

        let mut config = GatewayConfig::new(
            required(&self.gateway_url, "LLM_GATEWAY_URL")?,
            required(&self.api_key, "TFY_API_KEY")?,
            required(&self.search_api_key, "TAVILY_API_KEY")?,
        );
        config.model.clone_from(&self.model);
        config.search_url.clone_from(&self.search_url);
        config.max_results = self.max_results;
        config.report_path.clone_from(&self.report_path);
        config.request_timeout = self.request_timeout_secs.map(Duration::from_secs);
        config.validate()?;
        Ok(config)
    }

    /// Build the agent selected by the arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the research crew is selected but its
    /// settings are incomplete.
    pub fn build_agent(&self) -> Result<Arc<dyn AgentCapability>, Error> {
        if self.is_mock() {
            tracing::warn!("Running with the mock echo agent");
            return Ok(Arc::new(EchoAgent));
        }

        let config = self.gateway_config()?;
        tracing::info!(
            gateway = %config.base_url,
            model = %config.model,
            "Configured research crew"
        );
        Ok(Arc::new(ResearchCrew::new(&config)?))
    }

    /// Report path as a display string, for the server-info resource.
    #[must_use]
    pub fn report_path_display(&self) -> Option<String> {
        self.report_path
            .as_ref()
            .map(|p| p.display().to_string())
    }
}
