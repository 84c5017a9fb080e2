//! Share resolution for the relay
//!
//! This module holds the per-request pipeline that turns a cookie pool and
//! a share link into an annotated file listing: cookie selection, share
//! identifier parsing, jsToken extraction from the share page, and the
//! authenticated listing API call.

pub mod client;
pub mod cookie;
pub mod surl;
pub mod token;

pub use client::RelayClient;
pub use cookie::{CookieConfig, parse_cookie_pool, select_cookie};
pub use surl::extract_surl;
pub use token::{extract_js_token, find_between};
