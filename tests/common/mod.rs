//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
pub mod helpers {
    use terabox_share_relay::config::Settings;

    /// Create test settings pointed at a mock upstream
    pub fn settings_for(upstream_url: &str) -> Settings {
        let mut settings = Settings::default();
        settings.upstream.base_url = upstream_url.to_string();
        settings
    }

    /// Build the relay endpoint URI for the given raw parameter values
    pub fn relay_uri(cookies: &str, url: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("cookies", cookies)
            .append_pair("url", url)
            .finish();
        format!("/?{}", query)
    }

    /// Host label of a mock server (its URI without the scheme)
    pub fn host_label(uri: &str) -> String {
        uri.trim_start_matches("http://")
            .trim_start_matches("https://")
            .to_string()
    }
}
