//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for the share relay.
//! Per-request inputs (the cookie pool and the share link) never live here;
//! they arrive as query parameters on each request. Settings only cover
//! deployment concerns: where to bind, which upstream frontend to talk to,
//! and how to log.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration settings for the share relay
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server configuration
    pub server: ServerSettings,
    /// Upstream file-host configuration
    pub upstream: UpstreamSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
}

/// Upstream file-host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Base URL of the upstream share frontend
    pub base_url: String,
    /// User-Agent sent on both upstream calls
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            upstream: UpstreamSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "::".to_string(),
            port: 8080,
        }
    }
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "https://dm.terabox.app".to_string(),
            user_agent: "Mozilla/5.0 (Linux; Android 13)".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut settings = Self::default();

        if let Ok(host) = std::env::var("RELAY_SERVER_HOST") {
            settings.server.host = host;
        }

        if let Ok(port) = std::env::var("RELAY_SERVER_PORT") {
            settings.server.port = port
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid port: {}", e)))?;
        }

        if let Ok(base_url) = std::env::var("RELAY_UPSTREAM_URL") {
            settings.upstream.base_url = base_url;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML configuration file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&contents)
            .map_err(|e| crate::Error::Config(format!("Invalid config file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the final configuration
    pub fn validate(&self) -> crate::Result<()> {
        let parsed = url::Url::parse(&self.upstream.base_url)
            .map_err(|e| crate::Error::Config(format!("Invalid upstream base URL: {}", e)))?;
        if parsed.host_str().is_none() {
            return Err(crate::Error::Config(format!(
                "Upstream base URL has no host: {}",
                self.upstream.base_url
            )));
        }
        Ok(())
    }
}
