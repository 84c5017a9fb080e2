//! Script mode CLI logic
//!
//! One-shot share resolution: run the same pipeline the server runs for a
//! single request and print the annotated listing JSON to stdout.

use crate::{Settings, relay::RelayClient, relay::cookie::parse_cookie_pool};
use anyhow::Result;

/// Arguments for script mode
#[derive(Debug)]
pub struct FetchArgs {
    /// Raw cookie pool, entries joined by `||`
    pub cookies: String,
    /// Share link to resolve
    pub url: String,
    /// Optional upstream base URL override
    pub upstream_url: Option<String>,
}

/// Run script mode with the given arguments.
///
/// Prints the pretty-printed listing to stdout on success. Errors are
/// returned to the caller for reporting on stderr.
pub async fn run_fetch_mode(args: FetchArgs) -> Result<()> {
    let mut settings = Settings::from_env().unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to load settings from environment: {}. Using defaults.",
            e
        );
        Settings::default()
    });
    if let Some(upstream_url) = args.upstream_url {
        settings.upstream.base_url = upstream_url;
    }

    let pool = parse_cookie_pool(&args.cookies);
    if pool.is_empty() {
        anyhow::bail!("No cookies provided");
    }

    let client = RelayClient::new(&settings)?;
    let listing = client.resolve_share(&pool, &args.url).await?;

    println!("{}", serde_json::to_string_pretty(&listing)?);

    Ok(())
}
