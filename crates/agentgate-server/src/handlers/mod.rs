mod auth;
mod chat;
mod health;
mod mcp;

pub use auth::require_bearer;
pub use chat::chat;
pub use health::{health, mcp_health};
pub use mcp::mcp_request;
