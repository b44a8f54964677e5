use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::node::config::NodeConfig;
use crate::node::node::Node;
use crate::utils::logging::init_logging;

/// CLI for the account server.
#[derive(Parser)]
#[clap(name = "accountd", version)]
pub struct Cli {
    /// HTTP bind address (host:port)
    #[clap(long, default_value = "0.0.0.0:8080")]
    pub http: String,

    /// RPC bind address (host:port)
    #[clap(long, default_value = "0.0.0.0:9090")]
    pub rpc: String,

    /// Optional TOML config file; overrides the address flags
    #[clap(long)]
    pub config: Option<PathBuf>,
}

pub async fn run_cli() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => NodeConfig::load(path)?,
        None => NodeConfig {
            http_addr: cli.http.clone(),
            rpc_addr: cli.rpc.clone(),
        },
    };

    let node = Node::new(config);
    let handle = node.start().await?;

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    println!("Shutting down servers...");
    handle.shutdown().await?;
    println!("Servers stopped");
    Ok(())
}
