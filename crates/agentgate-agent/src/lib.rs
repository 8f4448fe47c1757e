//! Agent backends behind the [`AgentCapability`](agentgate_core::AgentCapability)
//! interface.
//!
//! - [`ResearchCrew`]: two-step researcher/writer pipeline against an
//!   OpenAI-compatible gateway and a Tavily-compatible search API.
//! - [`EchoAgent`]: offline stand-in that answers without network access.

pub mod crew;
pub mod echo;
pub mod llm;
pub mod prompts;
pub mod search;

pub use crew::ResearchCrew;
pub use echo::EchoAgent;
pub use llm::LlmClient;
pub use search::{SearchClient, SearchHit};
