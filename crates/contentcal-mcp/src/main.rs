//! ContentCal MCP server — entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use contentcal_mcp::config::{BackendKind, GatewayConfig, GatewayState};
use contentcal_mcp::protocol::ProtocolHandler;
use contentcal_mcp::tools::ToolRegistry;
use contentcal_mcp::transport::HttpTransport;

#[derive(Parser)]
#[command(
    name = "contentcal-mcp",
    about = "MCP server exposing the generateCalendar tool over JSON-RPC/HTTP",
    version
)]
struct Cli {
    /// Listening port. Also reads from the PORT env var.
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server over HTTP (default).
    Serve {
        /// Listening port. Also reads from the PORT env var.
        #[arg(short, long)]
        port: Option<u16>,

        /// Generation backend. Also reads from the BACKEND env var.
        #[arg(long, value_enum)]
        backend: Option<BackendKind>,
    },

    /// Print server capabilities as JSON.
    Info,

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve {
        port: None,
        backend: None,
    }) {
        Commands::Serve { port, backend } => {
            let config = GatewayConfig::resolve(port.or(cli.port), backend);

            tracing::info!("ContentCal MCP server");
            tracing::info!("Backend: {:?}", config.backend);

            let state = Arc::new(GatewayState::new(&config));
            let handler = ProtocolHandler::new(state);
            let transport = HttpTransport::new(handler);
            transport.run(&format!("0.0.0.0:{}", config.port)).await?;
        }

        Commands::Info => {
            let capabilities = contentcal_mcp::types::InitializeResult::default_result();
            let config = GatewayConfig::resolve(None, None);
            let state = Arc::new(GatewayState::new(&config));
            let tools = ToolRegistry::list_tools(&state);
            let info = serde_json::json!({
                "server": capabilities.server_info,
                "protocol_version": capabilities.protocol_version,
                "capabilities": capabilities.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "backend": format!("{:?}", config.backend),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "contentcal-mcp", &mut std::io::stdout());
        }
    }

    Ok(())
}
