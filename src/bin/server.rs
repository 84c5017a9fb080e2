//! HTTP server binary for the share relay
//!
//! Starts an HTTP server exposing the relay endpoint. This is the
//! recommended mode for production deployments.
//!
//! # Usage
//!
//! ```bash
//! terabox-relay-server --port 8080 --host 0.0.0.0
//! ```
//!
//! # API Endpoints
//!
//! - `ANY /?cookies=...&url=...`: Resolve a share link into a file listing
//! - `GET /ping`: Health check endpoint

use clap::Parser;
use std::path::PathBuf;
use terabox_share_relay::cli::server::{ServerArgs, run_server_mode};

/// HTTP server for resolving TeraBox share links
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "::")]
    host: String,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    run_server_mode(ServerArgs {
        port: cli.port,
        host: cli.host,
        config: cli.config,
    })
    .await
}
