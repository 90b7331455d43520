//! Configuration for catalog scraping.
//!
//! The `Options` struct carries every value that used to be ambient: the
//! upstream host, request headers, thresholds and output switches. Pass it to
//! [`crate::CatalogBuilder`] and [`crate::HttpTransport`] at construction.

use std::time::Duration;

use url::Url;

use crate::error::Result;

/// Default upstream host of the Google Hacking Database.
pub const DEFAULT_BASE_URL: &str = "https://www.exploit-db.com";

/// Default path of the catalog listing, relative to the base URL.
pub const DEFAULT_CATALOG_PATH: &str = "/google-hacking-database";

/// Headers sent with every request. The XMLHttpRequest marker makes the
/// listing endpoint answer with JSON instead of the HTML page.
pub const DEFAULT_HEADERS: [(&str, &str); 5] = [
    ("Accept", "application/json, text/javascript, */*; q=0.01"),
    ("Accept-Encoding", "deflate, gzip, br"),
    ("Accept-Language", "en-US"),
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; WOW64; rv:60.0) Gecko/20100101 Firefox/60.0",
    ),
    ("X-Requested-With", "XMLHttpRequest"),
];

/// Configuration options for fetching and building the catalog.
///
/// # Example
///
/// ```rust
/// use ghdb_scraper::Options;
///
/// let options = Options {
///     fetch_workers: 4,
///     store_normalized_dork: true,
///     ..Options::default()
/// };
/// assert_eq!(options.min_dork_len, 5);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Root every catalog and detail path is resolved against. A path prefix
    /// such as `http://host/mirror` is kept: `/ghdb/1` resolves to
    /// `http://host/mirror/ghdb/1`.
    ///
    /// Default: `https://www.exploit-db.com`
    pub base_url: Url,

    /// Path of the JSON catalog listing.
    ///
    /// Default: `/google-hacking-database`
    pub catalog_path: String,

    /// Header name/value pairs sent with every request.
    ///
    /// Default: [`DEFAULT_HEADERS`]
    pub headers: Vec<(String, String)>,

    /// Per-request timeout. `None` leaves the transport's own default.
    ///
    /// Default: `Some(30s)`
    pub timeout: Option<Duration>,

    /// Dorks whose normalized, trimmed length is at most this many
    /// characters are discarded.
    ///
    /// Default: `5`
    pub min_dork_len: usize,

    /// Store the normalized dork in each entry instead of the text as
    /// extracted from the listing.
    ///
    /// Default: `false`
    pub store_normalized_dork: bool,

    /// Number of threads fetching descriptions within a category.
    /// Values below 1 behave as 1.
    ///
    /// Default: `1`
    pub fetch_workers: usize,

    /// Pretty-print the JSON output.
    ///
    /// Default: `false`
    pub pretty: bool,

    /// Also write one file per category next to the combined output.
    ///
    /// Default: `true`
    pub split_categories: bool,
}

impl Default for Options {
    fn default() -> Self {
        #[allow(clippy::expect_used)]
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL");

        Self {
            base_url,
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            headers: DEFAULT_HEADERS
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
            timeout: Some(Duration::from_secs(30)),
            min_dork_len: 5,
            store_normalized_dork: false,
            fetch_workers: 1,
            pretty: false,
            split_categories: true,
        }
    }
}

impl Options {
    /// Options pointing at a different upstream host, e.g. a mirror or a
    /// local test server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            ..Self::default()
        })
    }

    /// Absolute URL of the catalog listing.
    pub fn catalog_url(&self) -> Result<Url> {
        self.resolve(&self.catalog_path)
    }

    /// Resolve a path (or absolute URL) from the listing against `base_url`.
    ///
    /// Paths are appended below the base path rather than replacing it.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        let path = path.trim();
        if let Ok(absolute) = Url::parse(path) {
            return Ok(absolute);
        }

        let mut root = self.base_url.clone();
        root.set_query(None);
        root.set_fragment(None);
        if !root.path().ends_with('/') {
            let prefixed = format!("{}/", root.path());
            root.set_path(&prefixed);
        }
        Ok(root.join(path.trim_start_matches('/'))?)
    }

    /// Worker count clamped to at least one.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.fetch_workers.max(1)
    }
}
