//! Description fetching for individual dorks.
//!
//! Every listing record links to a detail page whose meta-description is the
//! human-readable explanation of the dork. A missing description must never
//! abort a run, so [`DescriptionFetcher::fetch_description`] degrades to an
//! empty string. [`DescriptionFetcher::fetch`] keeps the failure visible.

use tracing::warn;

use crate::encoding::decode_body;
use crate::markup::extract_meta_description;
use crate::options::Options;
use crate::transport::{FetchError, Transport};

/// Fetches and cleans dork descriptions from detail pages.
pub struct DescriptionFetcher<'a, T: Transport + ?Sized> {
    transport: &'a T,
    options: &'a Options,
}

impl<'a, T: Transport + ?Sized> DescriptionFetcher<'a, T> {
    #[must_use]
    pub fn new(transport: &'a T, options: &'a Options) -> Self {
        Self { transport, options }
    }

    /// Fetch the description behind `href`.
    ///
    /// `Ok("")` means the page was fetched but had no description.
    pub fn fetch(&self, href: &str) -> Result<String, FetchError> {
        let url = self
            .options
            .resolve(href)
            .map_err(|err| FetchError::InvalidUrl(format!("{href}: {err}")))?;

        let response = self.transport.get(&url)?.error_for_status()?;
        let page = decode_body(&response.body, response.content_type.as_deref());

        Ok(clean_description(&extract_meta_description(&page)))
    }

    /// Fetch the description behind `href`, logging and swallowing failures.
    #[must_use]
    pub fn fetch_description(&self, href: &str) -> String {
        or_empty(href, self.fetch(href))
    }
}

/// Collapse a fetch outcome to its description, `""` on failure.
#[must_use]
pub(crate) fn or_empty(href: &str, outcome: Result<String, FetchError>) -> String {
    match outcome {
        Ok(description) => description,
        Err(err) => {
            warn!(href, error = %err, "Error fetching description");
            String::new()
        }
    }
}

/// Collapse blank-line pairs and trim.
///
/// The replacement is a single non-overlapping pass, so `"\n\n\n\n"` becomes
/// `"\n\n"`.
#[must_use]
pub fn clean_description(raw: &str) -> String {
    raw.replace("\n\n", "\n").trim().to_string()
}
