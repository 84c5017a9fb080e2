//! Request type definitions
//!
//! Defines the query parameters accepted by the relay endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters of the relay endpoint.
///
/// Both fields are required for a request to proceed, but they are modeled
/// as `Option` so a missing parameter surfaces as the usage message rather
/// than an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveParams {
    /// Cookie pool, entries joined by the literal delimiter `||`
    pub cookies: Option<String>,

    /// Share link to resolve
    pub url: Option<String>,
}

impl ResolveParams {
    /// Create new empty params
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cookie pool
    pub fn with_cookies(mut self, cookies: impl Into<String>) -> Self {
        self.cookies = Some(cookies.into());
        self
    }

    /// Set the share link
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_params_default() {
        let params = ResolveParams::default();
        assert_eq!(params.cookies, None);
        assert_eq!(params.url, None);
    }

    #[test]
    fn test_resolve_params_builder() {
        let params = ResolveParams::new()
            .with_cookies("ndus=a||ndus=b")
            .with_url("https://terabox.com/s/1abc");

        assert_eq!(params.cookies, Some("ndus=a||ndus=b".to_string()));
        assert_eq!(params.url, Some("https://terabox.com/s/1abc".to_string()));
    }

    #[test]
    fn test_resolve_params_missing_fields_deserialize_to_none() {
        let params: ResolveParams = serde_json::from_str(r#"{"cookies": "ndus=a"}"#).unwrap();
        assert_eq!(params.cookies, Some("ndus=a".to_string()));
        assert_eq!(params.url, None);
    }
}
