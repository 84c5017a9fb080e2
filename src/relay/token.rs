//! jsToken extraction from share page HTML
//!
//! The share page embeds its anti-scraping token differently depending on
//! how the page was rendered (URL-encoded into a script call, as a JSON
//! field, or as a bare query fragment). Extraction runs an ordered list of
//! heuristics and short-circuits on the first non-empty match; the empty
//! string is the defined failure signal.

use regex::Regex;
use std::sync::LazyLock;

/// Marker pairs tried before the regex fallbacks, in priority order.
const TOKEN_MARKERS: [(&str, &str); 4] = [
    // URL-encoded fn("...") idiom
    ("fn%28%22", "%22%29"),
    ("fn(\"", "\")"),
    ("\"jsToken\":\"", "\""),
    ("jsToken=", "&"),
];

static SCRIPT_TOKEN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"var\s+jsToken\s*=\s*['"]([^'"]+)['"]"#,
        r#""jsToken"\s*:\s*"([^"]+)""#,
        r"jsToken%3D([^%&]+)",
        r"jsToken\s*=\s*([^&\s]+)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid token pattern"))
    .collect()
});

/// Return the substring strictly between the first occurrence of `start`
/// and the next occurrence of `end` after it.
///
/// A missing start or end marker yields the empty string, never an error.
pub fn find_between<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let Some(start_at) = text.find(start) else {
        return "";
    };
    let from = start_at + start.len();
    match text[from..].find(end) {
        Some(end_at) => &text[from..from + end_at],
        None => "",
    }
}

/// Locate the jsToken embedded in share page HTML.
///
/// Heuristics are applied in strict priority order: the four marker pairs
/// first, then the script regex patterns. Returns the empty string when
/// nothing matches. The extracted value is not validated against any
/// expected shape.
pub fn extract_js_token(html: &str) -> String {
    for (start, end) in TOKEN_MARKERS {
        let token = find_between(html, start, end);
        if !token.is_empty() {
            return token.to_string();
        }
    }
    extract_token_from_script(html)
}

/// Regex fallbacks over the full HTML, tried in order.
fn extract_token_from_script(html: &str) -> String {
    for pattern in SCRIPT_TOKEN_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(html)
            && let Some(token) = caps.get(1)
        {
            return token.as_str().to_string();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_between_basic() {
        assert_eq!(find_between("a[token]b", "[", "]"), "token");
    }

    #[test]
    fn test_find_between_missing_start() {
        assert_eq!(find_between("no markers here", "[", "]"), "");
    }

    #[test]
    fn test_find_between_missing_end() {
        assert_eq!(find_between("a[token no close", "[", "]"), "");
    }

    #[test]
    fn test_find_between_uses_first_start() {
        assert_eq!(find_between("x[a]y[b]z", "[", "]"), "a");
    }

    #[test]
    fn test_url_encoded_fn_marker() {
        let html = "window.jsData=fn%28%22tok_encoded%22%29;";
        assert_eq!(extract_js_token(html), "tok_encoded");
    }

    #[test]
    fn test_plain_fn_marker() {
        let html = r#"<script>locals.mset(fn("abc123"));</script>"#;
        assert_eq!(extract_js_token(html), "abc123");
    }

    #[test]
    fn test_json_field_marker() {
        let html = r#"{"uk":123,"jsToken":"tok_json","sign":"x"}"#;
        assert_eq!(extract_js_token(html), "tok_json");
    }

    #[test]
    fn test_query_fragment_marker() {
        let html = "src=\"/api?jsToken=tok_frag&clienttype=5\"";
        assert_eq!(extract_js_token(html), "tok_frag");
    }

    #[test]
    fn test_var_assignment_fallback() {
        let html = "<script>var jsToken = 'tok_var';</script>";
        assert_eq!(extract_js_token(html), "tok_var");
    }

    #[test]
    fn test_percent_encoded_fallback() {
        let html = "href=\"/share?jsToken%3Dtok_pct%26root%3D1\"";
        assert_eq!(extract_js_token(html), "tok_pct");
    }

    #[test]
    fn test_bare_assignment_fallback() {
        let html = "jsToken = tok_bare more text";
        assert_eq!(extract_js_token(html), "tok_bare");
    }

    #[test]
    fn test_priority_order_markers_win() {
        // Both the fn("...") idiom and a JSON field are present; the
        // earlier heuristic must win.
        let html = r#"fn("first") ... "jsToken":"second""#;
        assert_eq!(extract_js_token(html), "first");
    }

    #[test]
    fn test_priority_order_within_markers() {
        let html = r#"fn%28%22encoded%22%29 fn("plain")"#;
        assert_eq!(extract_js_token(html), "encoded");
    }

    #[test]
    fn test_query_fragment_without_terminator_falls_through() {
        // `jsToken=` with no trailing `&` fails the marker pair, but the
        // bare-assignment regex still picks it up.
        let html = "jsToken=tok_tail";
        assert_eq!(extract_js_token(html), "tok_tail");
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert_eq!(extract_js_token("<html><body>nothing</body></html>"), "");
        assert_eq!(extract_js_token(""), "");
    }
}
