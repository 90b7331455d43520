//! Compiled regex patterns for dork processing.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Domain Validation
// =============================================================================

/// Matches registrable domain names: two or more LDH labels of 1-63 chars,
/// no hyphen at either end of a label, alphabetic or punycode TLD.
///
/// Overall length (253) is checked separately since the regex crate has no
/// lookahead.
pub static DOMAIN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,63}|xn--[a-z0-9-]{1,59})$",
    )
    .expect("DOMAIN_NAME regex")
});

// =============================================================================
// Dork Normalization
// =============================================================================

/// Matches a `site:` / `inurl:` clause with optional leading hyphen and
/// optional quotes. Group 1 is the host-like argument.
///
/// `\b` keeps the keyword from matching inside words like `website:`.
pub static EXCLUSION_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"-?\b(?:site|inurl):["']?([A-Za-z0-9_.\-]+)["']?"#)
        .expect("EXCLUSION_CLAUSE regex")
});
