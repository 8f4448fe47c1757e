use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

pub const DEFAULT_MODEL: &str = "openai-main/gpt-4o";
pub const DEFAULT_SEARCH_URL: &str = "https://api.tavily.com";
pub const DEFAULT_MAX_RESULTS: u32 = 5;

/// Connection settings for the upstream model gateway and search API.
///
/// Built once at startup and moved into the agent that needs it.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Base URL of the OpenAI-compatible gateway, e.g. `https://gw.example/v1`.
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Base URL of the Tavily-compatible search API.
    pub search_url: String,
    pub search_api_key: String,
    pub max_results: u32,
    /// Where to also write the finished report, if anywhere.
    pub report_path: Option<PathBuf>,
    /// Per-request timeout on gateway and search calls. `None` leaves it
    /// to the platform.
    pub request_timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Create a config with defaults for everything but the endpoints and keys.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        search_api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            search_api_key: search_api_key.into(),
            max_results: DEFAULT_MAX_RESULTS,
            report_path: None,
            request_timeout: None,
        }
    }

    /// Check that every required setting is a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first blank setting.
    pub fn validate(&self) -> Result<(), Error> {
        let required = [
            ("gateway url", &self.base_url),
            ("gateway api key", &self.api_key),
            ("model", &self.model),
            ("search url", &self.search_url),
            ("search api key", &self.search_api_key),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{name} must not be empty")));
            }
        }
        if self.max_results == 0 {
            return Err(Error::Config("max results must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Gateway base URL without a trailing slash.
    #[must_use]
    pub fn gateway_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Search base URL without a trailing slash.
    #[must_use]
    pub fn search_base(&self) -> &str {
        self.search_url.trim_end_matches('/')
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("search_url", &self.search_url)
            .field("search_api_key", &"<redacted>")
            .field("max_results", &self.max_results)
            .field("report_path", &self.report_path)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
