//! Upstream HTTP client and share resolution pipeline
//!
//! Owns the `reqwest` client and the fixed header set both upstream calls
//! carry. The two calls of a request are strictly sequential: the listing
//! API call needs the jsToken scraped from the share page response.

use crate::{
    Result,
    config::Settings,
    relay::{
        cookie::{CookieConfig, select_cookie},
        surl::extract_surl,
        token::extract_js_token,
    },
};
use reqwest::{
    Client,
    header::{ACCEPT, COOKIE, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT},
};
use serde_json::Value;
use url::form_urlencoded;

const REFERER_VALUE: &str = "https://terabox.com/";
const ORIGIN_VALUE: &str = "https://terabox.com";

/// Client for the upstream share frontend and listing API
#[derive(Debug)]
pub struct RelayClient {
    /// HTTP client
    client: Client,
    /// Base URL of the upstream frontend, without trailing slash
    base_url: String,
    /// Host label reported as `host_used`
    host: String,
    /// User-Agent sent on both calls
    user_agent: String,
}

impl RelayClient {
    /// Create a new relay client from settings.
    ///
    /// No timeout is configured on the client; cancellation policy is left
    /// to the hosting environment.
    pub fn new(settings: &Settings) -> Result<Self> {
        let base_url = settings.upstream.base_url.trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| crate::Error::config(format!("Invalid upstream base URL: {}", e)))?;
        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(crate::Error::config(format!(
                    "Upstream base URL has no host: {}",
                    base_url
                )));
            }
        };

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url,
            host,
            user_agent: settings.upstream.user_agent.clone(),
        })
    }

    /// Host label injected into listing responses as `host_used`
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Resolve a share link into an annotated file listing.
    ///
    /// Runs the whole per-request pipeline: pick a cookie, parse the share
    /// identifier, scrape the jsToken from the share page, and call the
    /// listing API. The pool must be non-empty (validated by the caller).
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use terabox_share_relay::{RelayClient, Settings};
    ///
    /// # tokio_test::block_on(async {
    /// let client = RelayClient::new(&Settings::default())?;
    /// let pool = vec!["ndus=...".to_string()];
    /// let listing = client
    ///     .resolve_share(&pool, "https://terabox.com/s/1abcDEF")
    ///     .await?;
    /// println!("{}", listing);
    /// # Ok::<(), terabox_share_relay::Error>(())
    /// # });
    /// ```
    pub async fn resolve_share(&self, pool: &[String], input_url: &str) -> Result<Value> {
        let config = select_cookie(pool, &self.host);
        tracing::debug!("Selected {} for this request", config.id);

        let surl = extract_surl(input_url).ok_or(crate::Error::SurlNotFound)?;

        let html = self.fetch_share_page(&config, &surl).await?;
        let token = extract_js_token(&html);
        if token.is_empty() {
            tracing::warn!("No jsToken found in share page for surl {}", surl);
            return Err(crate::Error::TokenExtraction);
        }

        self.fetch_share_list(&config, &token, &surl).await
    }

    /// Fetch the share page HTML (network call #1).
    ///
    /// The surl is interpolated as-is; the site expects it unencoded.
    pub async fn fetch_share_page(&self, config: &CookieConfig, surl: &str) -> Result<String> {
        let page_url = format!("{}/sharing/link?surl={}", self.base_url, surl);
        tracing::debug!("Fetching share page: {}", page_url);

        let response = self
            .client
            .get(&page_url)
            .headers(self.request_headers(&config.cookie)?)
            .send()
            .await?;
        Ok(response.text().await?)
    }

    /// Call the listing API and annotate the result (network call #2).
    ///
    /// A body that does not parse as JSON is carried back verbatim as an
    /// [`crate::Error::UpstreamFormat`] payload.
    pub async fn fetch_share_list(
        &self,
        config: &CookieConfig,
        token: &str,
        surl: &str,
    ) -> Result<Value> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("clienttype", "5")
            .append_pair("jsToken", token)
            .append_pair("shorturl", surl)
            .append_pair("root", "1")
            .finish();
        let api_url = format!("{}/share/list?{}", self.base_url, query);
        tracing::debug!("Calling listing API: {}", api_url);

        let response = self
            .client
            .get(&api_url)
            .headers(self.request_headers(&config.cookie)?)
            .send()
            .await?;
        let body = response.text().await?;

        match serde_json::from_str::<Value>(&body) {
            Ok(listing) => Ok(annotate_listing(listing, config)),
            Err(_) => Err(crate::Error::UpstreamFormat { body }),
        }
    }

    /// Fixed header set carried by both upstream calls
    fn request_headers(&self, cookie: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(COOKIE, HeaderValue::from_str(cookie)?);
        headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));
        headers.insert(ORIGIN, HeaderValue::from_static(ORIGIN_VALUE));
        Ok(headers)
    }
}

/// Annotate a listing with the cookie identifier and host that served it.
///
/// Takes the value by ownership and returns a new one rather than mutating
/// through a shared reference. Non-object JSON passes through unchanged.
pub fn annotate_listing(listing: Value, config: &CookieConfig) -> Value {
    match listing {
        Value::Object(mut map) => {
            map.insert("cookie_used".to_string(), Value::String(config.id.clone()));
            map.insert("host_used".to_string(), Value::String(config.host.clone()));
            Value::Object(map)
        }
        other => other,
    }
}
