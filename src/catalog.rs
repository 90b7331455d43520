//! Catalog data types.
//!
//! `RawResponse`/`RawRecord` mirror the upstream JSON listing. `Catalog` is
//! the output artifact: categories in ascending id order, each with its
//! entries in listing order.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

// =============================================================================
// Upstream listing
// =============================================================================

/// The JSON body of the catalog listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResponse {
    /// Upstream's own count of records. Informational only.
    #[serde(rename = "recordsTotal", default)]
    pub records_total: u64,

    /// The records, in listing order. Kept undecoded so one malformed record
    /// cannot fail the whole listing; see [`RawRecord::from_value`].
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

/// One catalog record as listed upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Anchor fragment holding the dork text and its detail page link.
    pub url_title: String,

    /// Category the record belongs to.
    pub category: RawCategory,
}

impl RawRecord {
    /// Decode one element of the listing's `data` array.
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

/// Category object nested in each record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    /// Numeric id, sent either as a number or a numeric string.
    pub cat_id: RawCategoryId,

    /// Display name.
    pub cat_title: String,
}

/// Category id as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawCategoryId {
    Number(i64),
    Text(String),
}

impl RawCategoryId {
    /// Numeric value of the id, if it is one.
    #[must_use]
    pub fn parse(&self) -> Option<u32> {
        match self {
            Self::Number(n) => u32::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

// =============================================================================
// Output
// =============================================================================

/// A normalized dork with its description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub dork: String,

    /// Meta-description of the detail page. Empty when none was found or the
    /// fetch failed.
    pub description: String,
}

/// All entries of one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub entries: Vec<Entry>,
}

/// Counters collected while building a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// `recordsTotal` as reported upstream.
    pub records_total: u64,
    /// Records present in the listing body.
    pub records_seen: usize,
    /// Entries written to the catalog.
    pub entries_emitted: usize,
    /// Records dropped because the normalized dork was empty or too short.
    pub discarded_short: usize,
    /// Records dropped for undecodable fields, unparseable category ids or
    /// missing anchors.
    pub skipped_malformed: usize,
    /// Description fetches that failed and were recorded as empty.
    pub descriptions_failed: usize,
    /// Detail pages fetched fine but without a description.
    pub descriptions_missing: usize,
}

/// The categorized dork catalog.
///
/// Serializes as a JSON object mapping category name to entries, keys in
/// ascending category id order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    stats: CatalogStats,
}

impl Catalog {
    pub(crate) fn new(categories: Vec<Category>, stats: CatalogStats) -> Self {
        Self { categories, stats }
    }

    /// Categories in ascending id order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Counters from the build.
    #[must_use]
    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    /// Entries filed under `name`, if that category exists.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Entry]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.entries.as_slice())
    }

    /// Category names in output order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Total number of entries across categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.entries)?;
        }
        map.end()
    }
}
