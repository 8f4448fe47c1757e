//! REST adapter: `POST /chat` and `GET /health` over the configured agent.

use clap::Parser;

use agentgate_server::app_state::AppState;
use agentgate_server::config::{AgentArgs, ListenArgs};
use agentgate_server::{router, serve};

#[derive(Parser)]
#[command(name = "agentgate-rest", about = "Serve the research agent over REST")]
struct Cli {
    #[command(flatten)]
    listen: ListenArgs,

    #[command(flatten)]
    agent: AgentArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    serve::init_tracing();
    let cli = Cli::parse();

    let agent = cli.agent.build_agent()?;
    let state = AppState::new(agent);
    let app = router::create_rest_router(state, &cli.listen.root_path);

    tracing::info!("agentgate REST adapter v{}", env!("CARGO_PKG_VERSION"));
    serve::serve(&cli.listen, app).await
}
