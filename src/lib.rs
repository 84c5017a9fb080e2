//! TeraBox Share Relay
//!
//! A stateless HTTP relay that resolves TeraBox share links into file
//! listings. Given a pool of session cookies and a share link, the relay
//! scrapes the anti-scraping `jsToken` out of the server-rendered share
//! page, then calls the site's internal `/share/list` API and forwards the
//! JSON result to the caller, annotated with the cookie and host that were
//! used.
//!
//! # Architecture
//!
//! The project consists of two main operation modes:
//! - **HTTP Server Mode**: An always-running service exposing the relay as
//!   a single method-agnostic endpoint
//! - **Script Mode**: A command-line tool for one-shot share resolution
//!
//! Every request is handled independently: one cookie is picked uniformly
//! at random from the caller-supplied pool, the share identifier is parsed
//! from the caller's URL, and two sequential upstream calls produce the
//! listing. Nothing persists between requests.
//!
//! # Usage
//!
//! ## HTTP Server Mode
//!
//! ```bash
//! terabox-relay-server --port 8080 --host 0.0.0.0
//! ```
//!
//! ## Script Mode
//!
//! ```bash
//! terabox-relay-fetch --cookies "ndus=..." --url "https://terabox.com/s/1abcDEF"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use terabox_share_relay::{RelayClient, Settings};
//!
//! # fn example() -> terabox_share_relay::Result<()> {
//! let settings = Settings::default();
//! let client = RelayClient::new(&settings)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod relay;
pub mod server;
pub mod types;
pub mod utils;

pub use config::Settings;
pub use error::{Error, Result};
pub use relay::{CookieConfig, RelayClient, extract_js_token, extract_surl};
pub use types::{PingResponse, ResolveParams};
