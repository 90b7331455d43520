//! Character encoding detection for fetched pages.
//!
//! Detail pages arrive as raw bytes. The charset is taken from the HTTP
//! `Content-Type` header when present, then from the page's own `<meta>`
//! declarations, and defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `charset=` parameter in a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Bytes of the document head scanned for a `<meta>` charset.
const SNIFF_LEN: usize = 1024;

/// Resolve the encoding named in a `Content-Type` header value, if any.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Detect the encoding declared inside an HTML document.
///
/// Only the first 1024 bytes are examined. Covers both
/// `<meta charset>` and `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    CHARSET_META_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode a response body to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use ghdb_scraper::encoding::decode_body;
///
/// let body = b"<meta name=\"description\" content=\"Caf\xE9\">";
/// let text = decode_body(body, Some("text/html; charset=ISO-8859-1"));
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .unwrap_or_else(|| detect_encoding(body));

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_wins_over_meta() {
        let body = b"<html><head><meta charset=\"utf-8\"></head><body>Caf\xE9</body></html>";
        let text = decode_body(body, Some("text/html; charset=windows-1252"));
        assert!(text.contains("Café"));
    }

    #[test]
    fn meta_charset_used_without_header_charset() {
        let body = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        let text = decode_body(body, Some("text/html"));
        assert!(text.contains("Café"));
    }

    #[test]
    fn http_equiv_content_type_detected() {
        let body = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(body).name(), "windows-1252");
    }

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html><body>x</body></html>"), UTF_8);
        assert_eq!(decode_body("naïve".as_bytes(), None), "naïve");
    }

    #[test]
    fn unknown_header_charset_falls_back() {
        assert!(charset_from_content_type("text/html; charset=bogus-charset").is_none());
        assert!(charset_from_content_type("application/json").is_none());
    }

    #[test]
    fn invalid_bytes_do_not_panic() {
        let text = decode_body(b"Test \xFF\xFE Invalid", None);
        assert!(text.contains("Test"));
        assert!(text.contains("Invalid"));
    }
}
