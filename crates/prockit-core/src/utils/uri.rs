//! Web URI validation
//!
//! The syntactic rules follow the classic `valid-url` checks: restricted
//! character set, well-formed percent escapes, a lowercase-able scheme, and
//! an authority for web schemes. Candidates that pass are then parsed with
//! [`url::Url`] so hosts and ports are checked too.
//!
//! Because of that second pass, out-of-range ports and escaped host bytes
//! (`http://example.com:99999`, `http://exa%20mple.com`) are rejected.
//!
//! Validators return the accepted string exactly as given, never a rebuilt
//! or normalized URL, or `None` when it is rejected.

use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;
use url::Url;

/// Scheme prepended to non-strict input that carries no `http://` prefix
pub const DEFAULT_WEB_SCHEME_PREFIX: &str = "http://";

static SPLIT_REGEX: OnceLock<Regex> = OnceLock::new();
static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();

fn split_regex() -> &'static Regex {
    SPLIT_REGEX.get_or_init(|| {
        Regex::new(r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?")
            .expect("uri split pattern is a valid regex")
    })
}

fn scheme_regex() -> &'static Regex {
    SCHEME_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9+\-.]*$").expect("scheme pattern is a valid regex")
    })
}

/// Generic URI components as split by RFC 3986 appendix B
#[derive(Debug, Clone, PartialEq, Eq)]
struct UriParts<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
}

fn split_uri(value: &str) -> Option<UriParts<'_>> {
    let caps = split_regex().captures(value)?;
    Some(UriParts {
        scheme: caps.get(1).map(|m| m.as_str()),
        authority: caps.get(2).map(|m| m.as_str()),
        path: caps.get(3).map(|m| m.as_str()).unwrap_or(""),
    })
}

fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            ':' | '/' | '?' | '#' | '[' | ']' | '@' | '!' | '$' | '&' | '\'' | '(' | ')'
                | '*' | '+' | ',' | ';' | '=' | '.' | '-' | '_' | '~' | '%'
        )
}

/// Every `%` must introduce two hex digits
fn has_valid_escapes(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some(pair) if pair.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

/// Check whether `value` is a syntactically valid URI of any scheme
pub fn is_uri(value: &str) -> Option<String> {
    if value.is_empty() || !value.chars().all(is_uri_char) || !has_valid_escapes(value) {
        return None;
    }

    let parts = split_uri(value)?;
    let scheme = parts.scheme.filter(|s| !s.is_empty())?;

    match parts.authority {
        Some(authority) if !authority.is_empty() => {
            if !(parts.path.is_empty() || parts.path.starts_with('/')) {
                return None;
            }
        }
        _ => {
            if parts.path.starts_with("//") {
                return None;
            }
        }
    }

    if !scheme_regex().is_match(&scheme.to_ascii_lowercase()) {
        return None;
    }

    Some(value.to_string())
}

fn is_scheme_uri(value: &str, wanted: &str) -> Option<String> {
    let accepted = is_uri(value)?;
    let parts = split_uri(&accepted)?;

    if !parts.scheme?.eq_ignore_ascii_case(wanted) {
        return None;
    }
    if parts.authority.map_or(true, str::is_empty) {
        return None;
    }

    match Url::parse(&accepted) {
        Ok(url) if url.host_str().map_or(false, |h| !h.is_empty()) => Some(accepted),
        Ok(_) => None,
        Err(e) => {
            trace!(error = %e, "URI rejected by parser");
            None
        }
    }
}

/// Check whether `value` is a valid `http` URI
pub fn is_http_uri(value: &str) -> Option<String> {
    is_scheme_uri(value, "http")
}

/// Check whether `value` is a valid `https` URI
pub fn is_https_uri(value: &str) -> Option<String> {
    is_scheme_uri(value, "https")
}

/// Validate a web (`http` or `https`) URI
///
/// Absent or empty input is handed back unchanged. Outside strict mode,
/// input that does not contain `http://` gets that prefix before it is
/// checked, so bare host names such as `example.com` validate.
///
/// # Returns
/// The validated (possibly prefixed) URI, or `None` when it is not a web URI
pub fn is_web_uri(url: Option<&str>, strict: bool) -> Option<String> {
    let url = url?;
    if url.is_empty() {
        return Some(String::new());
    }

    let candidate = if !strict && !url.contains(DEFAULT_WEB_SCHEME_PREFIX) {
        format!("{}{}", DEFAULT_WEB_SCHEME_PREFIX, url)
    } else {
        url.to_string()
    };

    let validated = is_http_uri(&candidate).or_else(|| is_https_uri(&candidate));
    trace!(input = url, strict, valid = validated.is_some(), "Web URI check");
    validated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_is_prefixed_outside_strict_mode() {
        assert_eq!(
            is_web_uri(Some("example.com"), false).as_deref(),
            Some("http://example.com")
        );
    }

    #[test]
    fn test_strict_mode_requires_scheme() {
        assert_eq!(is_web_uri(Some("example.com"), true), None);
        assert_eq!(
            is_web_uri(Some("https://example.com/a?b=c#d"), true).as_deref(),
            Some("https://example.com/a?b=c#d")
        );
    }

    #[test]
    fn test_falsy_input_passes_through() {
        assert_eq!(is_web_uri(None, false), None);
        assert_eq!(is_web_uri(Some(""), false).as_deref(), Some(""));
        assert_eq!(is_web_uri(Some(""), true).as_deref(), Some(""));
    }

    #[test]
    fn test_existing_http_prefix_is_kept() {
        assert_eq!(
            is_web_uri(Some("http://example.com:8080/path"), false).as_deref(),
            Some("http://example.com:8080/path")
        );
    }

    #[test]
    fn test_rejects_invalid_characters_and_escapes() {
        assert_eq!(is_web_uri(Some("exa mple.com"), false), None);
        assert_eq!(is_web_uri(Some("example.com/%zz"), false), None);
        assert_eq!(is_web_uri(Some("example.com/%4"), false), None);
        assert_eq!(is_web_uri(Some("example.com/<script>"), false), None);
        assert!(is_web_uri(Some("example.com/%20ok"), false).is_some());
    }

    #[test]
    fn test_rejects_non_web_schemes() {
        assert_eq!(is_web_uri(Some("ftp://example.com"), true), None);
        assert_eq!(is_web_uri(Some("mailto:someone@example.com"), true), None);
    }

    #[test]
    fn test_accepted_value_is_the_candidate_as_given() {
        assert_eq!(
            is_web_uri(Some("http://example.com?"), true).as_deref(),
            Some("http://example.com?")
        );
        assert_eq!(
            is_http_uri("HTTP://Example.COM").as_deref(),
            Some("HTTP://Example.COM")
        );
    }

    #[test]
    fn test_rejects_bad_ports_and_escaped_hosts() {
        assert_eq!(is_web_uri(Some("http://example.com:99999"), true), None);
        assert_eq!(is_web_uri(Some("http://exa%20mple.com"), true), None);
    }

    #[test]
    fn test_rejects_missing_host() {
        assert_eq!(is_web_uri(Some("http://"), true), None);
        assert_eq!(is_web_uri(Some("http:///path"), true), None);
    }

    #[test]
    fn test_is_uri_accepts_other_schemes() {
        assert!(is_uri("mailto:someone@example.com").is_some());
        assert!(is_uri("urn:isbn:0451450523").is_some());
        assert!(is_uri("no-scheme").is_none());
        assert!(is_uri("1http://example.com").is_none());
        assert!(is_uri("").is_none());
    }

    #[test]
    fn test_scheme_specific_checks() {
        assert!(is_http_uri("http://example.com").is_some());
        assert!(is_http_uri("https://example.com").is_none());
        assert!(is_https_uri("HTTPS://example.com").is_some());
        assert!(is_https_uri("http://example.com").is_none());
    }
}
