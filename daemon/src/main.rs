//! Suffrage daemon — entry point for running a vote-ledger node.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use suffrage_node::{init_logging, LogFormat, Node, NodeConfig};

#[derive(Parser)]
#[command(name = "suffrage-daemon", about = "Proof-of-work vote ledger node")]
struct Cli {
    /// Path to a TOML configuration file. When omitted, defaults apply.
    #[arg(long, env = "SUFFRAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Overrides the config file value.
    #[arg(long, env = "SUFFRAGE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Bootstrap peer addresses (comma-separated: "1.2.3.4:7076,5.6.7.8:7076").
    #[arg(long, env = "SUFFRAGE_BOOTSTRAP_PEERS", value_delimiter = ',')]
    bootstrap_peers: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => NodeConfig::from_toml_file(path)?,
        None => NodeConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config.bootstrap_peers.extend(cli.bootstrap_peers);

    init_logging(
        LogFormat::from_config(&config.log_format),
        &config.log_level,
    );

    let node = Arc::new(Node::new(config));
    tracing::info!("suffrage node starting");

    {
        let node = Arc::clone(&node);
        tokio::spawn(async move {
            node.shutdown_controller().wait_for_signal().await;
        });
    }

    node.run().await;
    tracing::info!("suffrage node stopped");

    Ok(())
}
