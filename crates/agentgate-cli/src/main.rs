use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod chat_cmd;
mod mcp_cmd;

#[derive(Parser)]
#[command(name = "agentgate", about = "agentgate CLI - call the research agent over REST or MCP")]
struct Cli {
    /// Server base URL (REST or MCP adapter)
    #[arg(long, env = "AGENTGATE_URL", default_value = "http://localhost:8000")]
    url: String,

    /// Bearer token for the MCP endpoint
    #[arg(long, env = "MCP_AUTH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a query to `POST /chat` and print the report
    Chat {
        /// The question or research topic
        user_input: String,
    },

    /// Check `GET /health`
    Health,

    /// List the tools exposed by the MCP adapter
    Tools,

    /// Run the research tool through the MCP adapter
    Research {
        /// The research topic
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let url = cli.url.trim_end_matches('/');
    tracing::debug!("Using server {url}");

    match cli.command {
        Commands::Chat { user_input } => chat_cmd::run(url, &user_input).await?,
        Commands::Health => chat_cmd::health(url).await?,
        Commands::Tools => {
            mcp_cmd::McpClient::new(url, cli.token)
                .list_tools()
                .await?;
        }
        Commands::Research { query } => {
            mcp_cmd::McpClient::new(url, cli.token)
                .research(&query)
                .await?;
        }
    }

    Ok(())
}
