//! Dork normalization.
//!
//! The GHDB listing wraps many dorks in exclusion clauses bound to its own
//! host (typically `-site:exploit-db.com`). Those clauses belong to the site,
//! not the query. This module removes every `site:`/`inurl:` clause whose
//! argument is a real domain and leaves everything else alone, including
//! clauses with non-domain arguments such as `inurl:admin`.

use regex::Captures;

use crate::domain::is_domain;
use crate::patterns::EXCLUSION_CLAUSE;

/// Strips domain-bound `site:`/`inurl:` clauses from a raw dork.
///
/// Each pass removes the matched clauses at their own positions in a single
/// scan, so text elsewhere that happens to contain a clause is left alone.
/// Passes repeat until nothing changes, so the result is a fixed point and
/// `normalize` is idempotent.
///
/// The result is not trimmed.
///
/// # Examples
///
/// ```
/// use ghdb_scraper::normalize;
///
/// assert_eq!(normalize("-site:exploit-db.com inurl:admin"), " inurl:admin");
/// assert_eq!(normalize("site:\"internal-param\" foo"), "site:\"internal-param\" foo");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut current = raw.to_string();

    loop {
        let next = strip_domain_clauses(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One stripping pass over `dork`.
fn strip_domain_clauses(dork: &str) -> String {
    EXCLUSION_CLAUSE
        .replace_all(dork, |caps: &Captures| {
            if caps.get(1).is_some_and(|arg| is_domain(arg.as_str())) {
                String::new()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Returns `true` if `dork` contains at least one clause `normalize` would strip.
#[must_use]
pub fn has_domain_clause(dork: &str) -> bool {
    EXCLUSION_CLAUSE
        .captures_iter(dork)
        .any(|caps| caps.get(1).is_some_and(|arg| is_domain(arg.as_str())))
}
