//! Script mode binary for one-shot share resolution
//!
//! Resolves a single share link and prints the annotated listing JSON to
//! stdout. Useful for piping into `jq` or for cron-driven collection.
//!
//! # Usage
//!
//! ```bash
//! terabox-relay-fetch --cookies "ndus=..." --url "https://terabox.com/s/1abcDEF"
//! ```
//!
//! # Output
//!
//! The upstream listing object plus the two annotation fields:
//! ```json
//! {
//!   "errno": 0,
//!   "list": [],
//!   "cookie_used": "cookie-1",
//!   "host_used": "dm.terabox.app"
//! }
//! ```

use clap::Parser;
use terabox_share_relay::cli::fetch::{FetchArgs, run_fetch_mode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One-shot share link resolver
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "terabox-relay-fetch")]
struct Cli {
    /// Cookie pool, entries joined by the literal delimiter `||`
    #[arg(short, long, value_name = "COOKIES")]
    cookies: String,

    /// Share link to resolve
    #[arg(short, long, value_name = "URL")]
    url: String,

    /// Override the upstream base URL
    #[arg(long, value_name = "BASE_URL")]
    upstream_url: Option<String>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let default_level = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = FetchArgs {
        cookies: cli.cookies,
        url: cli.url,
        upstream_url: cli.upstream_url,
    };

    if let Err(e) = run_fetch_mode(args).await {
        eprintln!("Failed to resolve share. Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
