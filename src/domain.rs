//! Domain name validation.
//!
//! Decides whether the argument of a `site:`/`inurl:` clause is a registrable
//! domain. Only clauses bound to a real domain are stripped by
//! [`crate::normalize`].

use crate::patterns::DOMAIN_NAME;

/// Maximum length of a domain name in its textual form.
const MAX_DOMAIN_LEN: usize = 253;

/// Returns `true` if `token` has the syntax of a registrable domain name.
///
/// Accepts two or more dot-separated labels, each 1-63 ASCII letters, digits
/// or hyphens without a leading or trailing hyphen, ending in an alphabetic
/// (or `xn--` punycode) TLD. Matching is case-insensitive.
///
/// # Examples
///
/// ```
/// use ghdb_scraper::is_domain;
///
/// assert!(is_domain("example.com"));
/// assert!(is_domain("sub.example.co.uk"));
/// assert!(!is_domain("localhost:8080"));
/// assert!(!is_domain(""));
/// ```
#[must_use]
pub fn is_domain(token: &str) -> bool {
    !token.is_empty() && token.len() <= MAX_DOMAIN_LEN && DOMAIN_NAME.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_domains() {
        assert!(is_domain("example.com"));
        assert!(is_domain("sub.example.co.uk"));
        assert!(is_domain("exploit-db.com"));
        assert!(is_domain("EXAMPLE.ORG"));
        assert!(is_domain("a1.b2.io"));
    }

    #[test]
    fn rejects_non_domains() {
        assert!(!is_domain("not a domain"));
        assert!(!is_domain("localhost:8080"));
        assert!(!is_domain(""));
        assert!(!is_domain("localhost"));
        assert!(!is_domain("internal-param"));
        assert!(!is_domain("admin"));
    }

    #[test]
    fn rejects_malformed_labels() {
        assert!(!is_domain("-example.com"));
        assert!(!is_domain("example-.com"));
        assert!(!is_domain("exa_mple.com"));
        assert!(!is_domain("example..com"));
        assert!(!is_domain(".example.com"));
        assert!(!is_domain("example.com."));
        assert!(!is_domain("example.c"));
        assert!(!is_domain("example.123"));
    }

    #[test]
    fn enforces_length_limits() {
        let long_label = "a".repeat(64);
        assert!(!is_domain(&format!("{long_label}.com")));

        let max_label = "a".repeat(63);
        assert!(is_domain(&format!("{max_label}.com")));

        let too_long = format!("{}com", "abcdefghi.".repeat(26));
        assert!(too_long.len() > MAX_DOMAIN_LEN);
        assert!(!is_domain(&too_long));
    }

    #[test]
    fn accepts_punycode_tld() {
        assert!(is_domain("example.xn--p1ai"));
    }
}
