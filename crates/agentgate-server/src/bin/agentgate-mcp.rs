//! Tool adapter: the research agent as a single MCP tool on `POST /mcp`.

use clap::Parser;

use agentgate_mcp::SERVER_NAME;
use agentgate_server::app_state::AppState;
use agentgate_server::config::{AgentArgs, ListenArgs};
use agentgate_server::{router, serve};

#[derive(Parser)]
#[command(name = "agentgate-mcp", about = "Serve the research agent as an MCP tool")]
struct Cli {
    #[command(flatten)]
    listen: ListenArgs,

    #[command(flatten)]
    agent: AgentArgs,

    /// Bearer token clients must send to `/mcp`
    #[arg(long, env = "MCP_AUTH_TOKEN", hide_env_values = true)]
    auth_token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    serve::init_tracing();
    let cli = Cli::parse();

    let agent = cli.agent.build_agent()?;
    let state = AppState::new(agent)
        .with_auth_token(cli.auth_token)
        .with_report_path(cli.agent.report_path_display());

    if state.auth_token.is_none() {
        tracing::warn!("MCP_AUTH_TOKEN is not set; /mcp accepts unauthenticated requests");
    }

    let app = router::create_mcp_router(state, &cli.listen.root_path);

    tracing::info!(
        "Starting MCP server '{SERVER_NAME}' on http://{}/mcp",
        cli.listen.addr()
    );
    serve::serve(&cli.listen, app).await
}
