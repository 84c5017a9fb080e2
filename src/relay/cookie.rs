//! Cookie pool handling and selection
//!
//! The caller supplies the whole cookie pool on every request; one entry is
//! picked uniformly at random and reused for both upstream calls of that
//! request. Nothing about the pool survives the request.

use rand::Rng;

/// Per-request bundle of the selected cookie, upstream host label, and a
/// stable identifier derived from the chosen index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieConfig {
    /// Identifier of the chosen pool entry (`cookie-<index+1>`)
    pub id: String,
    /// Host label reported back to the caller as `host_used`
    pub host: String,
    /// The raw cookie string sent on both upstream calls
    pub cookie: String,
}

/// Split the raw `cookies` query parameter into a pool.
///
/// Entries are separated by the literal delimiter `||`; each entry is
/// trimmed and empty entries are dropped.
pub fn parse_cookie_pool(raw: &str) -> Vec<String> {
    raw.split("||")
        .map(str::trim)
        .filter(|cookie| !cookie.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pick one cookie from the pool uniformly at random.
///
/// The identifier is derived from the chosen index, not from cookie
/// content. The pool must be non-empty; callers validate the pool before
/// invoking this.
pub fn select_cookie(pool: &[String], host: &str) -> CookieConfig {
    let index = rand::thread_rng().gen_range(0..pool.len());
    CookieConfig {
        id: format!("cookie-{}", index + 1),
        host: host.to_string(),
        cookie: pool[index].clone(),
    }
}
