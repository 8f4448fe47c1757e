pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::GatewayConfig;
pub use error::Error;
pub use traits::AgentCapability;
pub use types::{ChatRequest, ChatResponse, ErrorBody, Report};
