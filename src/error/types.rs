//! Error type definitions
//!
//! Defines the main error types used throughout the share relay application.

use thiserror::Error;

/// Main error type for the share relay
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// The cookie pool was empty after splitting and trimming
    #[error("No cookies provided")]
    EmptyCookiePool,

    /// No share identifier could be parsed from the input URL
    #[error("Invalid URL. surl not found.")]
    SurlNotFound,

    /// No jsToken could be located in the share page HTML
    #[error("Failed to extract jsToken")]
    TokenExtraction,

    /// The listing API returned a body that is not JSON; carries the raw text
    #[error("Upstream returned non-JSON response")]
    UpstreamFormat { body: String },

    /// Network/HTTP client errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid header value (e.g. a cookie containing control characters)
    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new server error
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Create an upstream format error carrying the raw response text
    pub fn upstream_format(body: impl Into<String>) -> Self {
        Self::UpstreamFormat { body: body.into() }
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
