//! MCP server for the Smartlead campaign API.
//!
//! Run with `SMARTLEAD_API_KEY=... smartlead-mcp` for stdio, or
//! `smartlead-mcp --transport tcp --port 8050` to serve over a socket.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

mod client;
mod convert;
mod error;
mod server;
mod session;
mod tools;

use client::{ClientConfig, SmartleadClient, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use server::McpServer;
use session::McpSession;

/// Transport the server speaks JSON-RPC over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    /// Line-delimited JSON-RPC on stdin/stdout.
    Stdio,
    /// Line-delimited JSON-RPC over TCP connections.
    Tcp,
}

/// MCP server for the Smartlead campaign API.
///
/// Exposes Smartlead campaign operations as MCP tools for AI agents.
/// Communicates via JSON-RPC 2.0 over stdin/stdout or TCP.
#[derive(Parser)]
#[command(name = "smartlead-mcp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Smartlead API key. Required; the server refuses to start without one.
    #[arg(long, env = "SMARTLEAD_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL for the Smartlead API.
    #[arg(long, env = "SMARTLEAD_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Transport to serve on.
    #[arg(long, env = "TRANSPORT", value_enum, default_value = "stdio")]
    transport: Transport,

    /// Host to bind when using the TCP transport.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on when using the TCP transport.
    #[arg(long, env = "PORT", default_value_t = 8050)]
    port: u16,

    /// Enable debug logging to stderr.
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Logging goes to stderr; stdout belongs to the stdio transport.
    let default_directive = if args.verbose {
        "smartlead_mcp=debug"
    } else {
        "smartlead_mcp=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Validate required configuration
    let api_key = match args.api_key {
        Some(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("Error: Smartlead API key not set (use --api-key or SMARTLEAD_API_KEY)");
            std::process::exit(1);
        }
    };

    let config = ClientConfig::new(api_key)
        .api_url(args.api_url)
        .timeout(Duration::from_secs(args.timeout));

    let client = match SmartleadClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: Failed to initialize Smartlead client: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(api_url = client.api_url(), "Smartlead client initialized");

    // Create session and server
    let session = McpSession::new(client);
    let server = McpServer::new(session);

    // Run the server
    let result = match args.transport {
        Transport::Stdio => server.run_stdio().await,
        Transport::Tcp => server.run_tcp(&args.host, args.port).await,
    };

    if let Err(e) = result {
        eprintln!("Error: Server error: {}", e);
        std::process::exit(1);
    }
}
