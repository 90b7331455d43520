//! # ghdb-scraper
//!
//! Fetches the Google Hacking Database dork catalog, strips the exclusion
//! clauses the listing site adds to every dork, enriches each entry with the
//! description from its detail page, and writes the categorized result as
//! JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ghdb_scraper::{scrape, Options};
//! use std::path::Path;
//!
//! let catalog = scrape(Path::new("out/ghdb.json"), &Options::default())?;
//! println!("{} dorks in {} categories", catalog.len(), catalog.categories().len());
//! # Ok::<(), ghdb_scraper::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Domain validation**: [`is_domain`] decides whether a clause argument is a real domain
//! - **Normalization**: [`normalize`] removes domain-bound `site:`/`inurl:` clauses
//! - **Markup extraction**: [`extract_dork_and_link`] and [`extract_meta_description`]
//! - **Description fetching**: [`DescriptionFetcher`] degrades failures to an empty string
//! - **Aggregation**: [`CatalogBuilder`] groups, sorts, filters and assembles the [`Catalog`]

mod aggregator;
mod catalog;
mod description;
mod domain;
mod error;
mod markup;
mod normalize;
mod options;
mod patterns;

/// Character encoding detection for fetched pages.
pub mod encoding;

/// Writing catalogs and per-category files to disk.
pub mod output;

/// HTTP transport trait and the `reqwest` implementation.
pub mod transport;

use std::path::Path;

// Public API - re-exports
pub use aggregator::CatalogBuilder;
pub use catalog::{
    Catalog, CatalogStats, Category, Entry, RawCategory, RawCategoryId, RawRecord, RawResponse,
};
pub use description::{clean_description, DescriptionFetcher};
pub use domain::is_domain;
pub use error::{Error, Result};
pub use markup::{extract_dork_and_link, extract_meta_description};
pub use normalize::{has_domain_clause, normalize};
pub use options::{Options, DEFAULT_BASE_URL, DEFAULT_CATALOG_PATH, DEFAULT_HEADERS};
pub use transport::{FetchError, HttpTransport, Response, Transport};

/// Fetches the catalog over HTTP and writes it to `path`.
///
/// Writes per-category files as well when `options.split_categories` is set.
///
/// # Errors
///
/// Fails if the catalog listing cannot be fetched or decoded, or the output
/// cannot be written. Individual description failures are not errors.
pub fn scrape(path: &Path, options: &Options) -> Result<Catalog> {
    let transport = HttpTransport::new(options)?;
    CatalogBuilder::new(&transport, options).run(path)
}
