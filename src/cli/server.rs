//! Server mode CLI logic
//!
//! Contains the core logic for running the HTTP server mode.

use crate::{Settings, server::app, utils::version};
use anyhow::Result;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Arguments for server mode
#[derive(Debug)]
pub struct ServerArgs {
    pub port: u16,
    pub host: String,
    pub config: Option<PathBuf>,
}

/// Run server mode with the given arguments
pub async fn run_server_mode(args: ServerArgs) -> Result<()> {
    // Config file < environment < CLI flags
    let mut settings = load_settings(args.config.as_deref())?;
    settings.server.host = args.host.clone();
    settings.server.port = args.port;

    tracing::info!("Starting share relay v{}", version::get_version());
    tracing::info!("Upstream frontend: {}", settings.upstream.base_url);

    let app = app::create_app(settings)?;

    let addr = parse_bind_address(&args.host, args.port)?;
    let listener = bind_with_fallback(addr).await?;

    tracing::info!(
        "Share relay v{} listening on {}",
        version::get_version(),
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn load_settings(config: Option<&std::path::Path>) -> Result<Settings> {
    if let Some(path) = config {
        if path.exists() {
            tracing::info!("Loading configuration from file: {:?}", path);
            return Ok(Settings::from_file(path)?);
        }
        tracing::warn!("Configuration file not found: {:?}, using environment", path);
    }
    match Settings::from_env() {
        Ok(settings) => Ok(settings),
        Err(e) => {
            tracing::warn!(
                "Failed to load settings from environment: {}. Using defaults.",
                e
            );
            Ok(Settings::default())
        }
    }
}

/// Parse the host string into a bind address.
///
/// `::` and `0.0.0.0` parse directly as the respective any-addresses.
pub fn parse_bind_address(host: &str, port: u16) -> Result<SocketAddr> {
    let ip = host.parse::<IpAddr>().map_err(|_| {
        anyhow::anyhow!("Invalid host address: {}. Use '::' for IPv6 or '0.0.0.0' for IPv4", host)
    })?;
    Ok(SocketAddr::new(ip, port))
}

/// Bind the listener, falling back from IPv6-any to IPv4-any.
async fn bind_with_fallback(addr: SocketAddr) -> Result<tokio::net::TcpListener> {
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) if addr.ip().is_unspecified() && addr.is_ipv6() => {
            tracing::warn!(
                "Could not listen on [::]:{} (Caused by {}), falling back to 0.0.0.0",
                addr.port(),
                e
            );
            let fallback = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), addr.port());
            Ok(tokio::net::TcpListener::bind(fallback).await?)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind_ipv4_address() {
        let addr = parse_bind_address("127.0.0.1", 0).unwrap();
        assert_eq!(addr.ip(), IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)));
    }

    #[test]
    fn test_parse_bind_ipv6_any() {
        let addr = parse_bind_address("::", 4321).unwrap();
        assert!(addr.is_ipv6());
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 4321);
    }

    #[test]
    fn test_parse_bind_ipv4_any() {
        let addr = parse_bind_address("0.0.0.0", 0).unwrap();
        assert_eq!(addr.ip(), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }

    #[test]
    fn test_parse_bind_rejects_hostname() {
        let result = parse_bind_address("localhost", 8080);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid host address: localhost")
        );
    }

    #[test]
    fn test_parse_bind_rejects_empty() {
        assert!(parse_bind_address("", 8080).is_err());
    }

    #[tokio::test]
    async fn test_bind_with_fallback_loopback() {
        let addr = parse_bind_address("127.0.0.1", 0).unwrap();
        let listener = bind_with_fallback(addr).await.unwrap();
        assert_eq!(
            listener.local_addr().unwrap().ip(),
            IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
        );
    }

    #[tokio::test]
    async fn test_bind_with_fallback_any() {
        let addr = parse_bind_address("::", 0).unwrap();
        // Should bind either IPv6-any or the IPv4 fallback
        let listener = bind_with_fallback(addr).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_unspecified());
    }
}
