//! Markup extraction for catalog records and detail pages.
//!
//! Each catalog record carries its dork as an HTML fragment such as
//! `<a href="/ghdb/8221">intitle:"index of" -site:exploit-db.com</a>`.
//! The detail page behind that link holds the human-readable description in
//! its `<meta name="description">` tag.

use dom_query::{Document, Selection};

use crate::error::{Error, Result};

/// Get any attribute value of the first node in a selection.
#[inline]
fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Extracts the visible dork text and the link target from a record fragment.
///
/// Uses the first `<a>` element of the fragment. Entities in the text are
/// decoded by the parser; the text is returned untrimmed.
///
/// # Errors
///
/// Returns [`Error::MissingAnchor`] if the fragment has no anchor, or its
/// first anchor has no `href`.
///
/// # Example
///
/// ```
/// use ghdb_scraper::extract_dork_and_link;
///
/// let (dork, href) = extract_dork_and_link(r#"<a href="/ghdb/1">inurl:admin.php</a>"#)?;
/// assert_eq!(dork, "inurl:admin.php");
/// assert_eq!(href, "/ghdb/1");
/// # Ok::<(), ghdb_scraper::Error>(())
/// ```
pub fn extract_dork_and_link(fragment: &str) -> Result<(String, String)> {
    let doc = Document::from(fragment);
    let anchors = doc.select("a");
    let Some(node) = anchors.nodes().first() else {
        return Err(Error::MissingAnchor(fragment.to_string()));
    };

    let anchor = Selection::from(*node);
    let href = get_attribute(&anchor, "href")
        .ok_or_else(|| Error::MissingAnchor(fragment.to_string()))?;
    let text = anchor.text().to_string();

    Ok((text, href))
}

/// Extracts the `content` of the first `<meta name="description">` tag.
///
/// The `name` attribute is compared after trimming and lowercasing, so
/// `name=" Description "` matches. Returns an empty string when no such tag
/// exists or it carries no `content`.
#[must_use]
pub fn extract_meta_description(page: &str) -> String {
    let doc = Document::from(page);

    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);
        let Some(name) = get_attribute(&meta, "name") else {
            continue;
        };
        if name.trim().to_lowercase() == "description" {
            return get_attribute(&meta, "content").unwrap_or_default();
        }
    }

    String::new()
}
