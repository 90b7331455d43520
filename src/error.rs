//! Error types for ghdb-scraper.
//!
//! Only failures that abort a whole run surface as [`Error`]. Per-record
//! problems are logged, counted in [`crate::CatalogStats`] and skipped.

use crate::transport::FetchError;

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The catalog request failed at the transport level or returned non-2xx.
    #[error("Catalog fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The catalog response was not JSON.
    #[error("Expected JSON response but got {0}")]
    UnexpectedContentType(String),

    /// The catalog body could not be decoded.
    #[error("Catalog decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// A record's markup had no anchor element carrying an href.
    #[error("No anchor with href in markup: {0}")]
    MissingAnchor(String),

    /// A configured or extracted URL could not be resolved.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Writing the output failed.
    #[error("Output write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;
