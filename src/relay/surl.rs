//! Share identifier extraction
//!
//! Share links come in two shapes: a `surl` query parameter, or a short
//! path of the form `/s/<slug>`. Slugs handed out by the site carry a
//! leading `1` that is a flag bit, not part of the identifier, and must be
//! stripped.

use regex::Regex;
use std::sync::LazyLock;

static QUERY_SURL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"surl=([^&]+)").expect("valid surl query pattern"));

static PATH_SURL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/s/([^/?&]+)").expect("valid surl path pattern"));

/// Extract the share identifier from an arbitrary input URL.
///
/// A `surl` query parameter wins over the path form and is returned
/// byte-for-byte as it appears in the input, without any decoding. For the
/// `/s/<slug>` form, a leading `1` on the slug is stripped. Returns `None`
/// when neither shape matches or the identifier is empty; malformed input
/// never errors.
pub fn extract_surl(input: &str) -> Option<String> {
    if let Some(caps) = QUERY_SURL.captures(input) {
        return Some(caps[1].to_string());
    }

    if let Some(caps) = PATH_SURL.captures(input) {
        let slug = &caps[1];
        let surl = slug.strip_prefix('1').unwrap_or(slug);
        if surl.is_empty() {
            return None;
        }
        return Some(surl.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://terabox.com/sharing/link?surl=ABC", Some("ABC"))]
    #[case("https://terabox.com/page?foo=1&surl=ABC&bar=2", Some("ABC"))]
    #[case("https://terabox.com/s/1XYZ", Some("XYZ"))]
    #[case("https://terabox.com/s/XYZ", Some("XYZ"))]
    #[case("https://terabox.com/s/1abcDEF?pwd=1234", Some("abcDEF"))]
    #[case("https://terabox.com/home", None)]
    #[case("", None)]
    fn test_extract_surl(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_surl(input).as_deref(), expected);
    }

    #[test]
    fn test_query_param_wins_over_path() {
        let surl = extract_surl("https://terabox.com/s/1PATH?surl=QUERY");
        assert_eq!(surl.as_deref(), Some("QUERY"));
    }

    #[test]
    fn test_query_value_returned_as_is() {
        // No percent-decoding of the raw match
        let surl = extract_surl("https://terabox.com/link?surl=a%2Bb");
        assert_eq!(surl.as_deref(), Some("a%2Bb"));
    }

    #[test]
    fn test_empty_query_value_falls_through() {
        // `surl=` with no value does not match; neither does the path here
        assert_eq!(extract_surl("https://terabox.com/link?surl="), None);
    }

    #[test]
    fn test_slug_that_is_only_the_flag_bit() {
        assert_eq!(extract_surl("https://terabox.com/s/1"), None);
    }

    #[test]
    fn test_path_slug_stops_at_separators() {
        let surl = extract_surl("https://terabox.com/s/1abc/def");
        assert_eq!(surl.as_deref(), Some("abc"));
    }

    #[test]
    fn test_malformed_input_is_safe() {
        assert_eq!(extract_surl("not a url at all"), None);
        // The patterns match on raw text, so even a bare fragment works
        assert_eq!(extract_surl("/s/1frag").as_deref(), Some("frag"));
    }
}
