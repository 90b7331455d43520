//! Catalog aggregation.
//!
//! Turns the upstream listing into a [`Catalog`]:
//!
//! 1. Reject non-2xx or non-JSON responses (fatal)
//! 2. Decode `{recordsTotal, data}`, then each record on its own
//! 3. Group records by category id, first-seen title wins
//! 4. Walk categories in ascending id order
//! 5. Per record: extract, normalize, filter, fetch description
//!
//! Per-record problems never abort the run; they are logged and counted in
//! [`CatalogStats`].

use std::collections::BTreeMap;
use std::path::Path;
use std::thread;

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogStats, Category, Entry, RawRecord, RawResponse};
use crate::description::{or_empty, DescriptionFetcher};
use crate::error::{Error, Result};
use crate::markup::extract_dork_and_link;
use crate::normalize::normalize;
use crate::options::Options;
use crate::output;
use crate::transport::{FetchError, Response, Transport};

/// A record that survived extraction and filtering, awaiting its description.
#[derive(Debug)]
struct Candidate {
    dork: String,
    href: String,
}

/// Category bucket collected during grouping.
#[derive(Debug)]
struct Group {
    name: String,
    records: Vec<RawRecord>,
}

/// Builds the dork catalog from the upstream listing.
pub struct CatalogBuilder<'a, T: Transport + ?Sized> {
    transport: &'a T,
    options: &'a Options,
}

impl<'a, T: Transport + ?Sized> CatalogBuilder<'a, T> {
    #[must_use]
    pub fn new(transport: &'a T, options: &'a Options) -> Self {
        Self { transport, options }
    }

    /// Fetch the listing from the configured host and build the catalog.
    pub fn fetch_catalog(&self) -> Result<Catalog> {
        let url = self.options.catalog_url()?;
        info!(url = %url, "Retrieving google dorks");
        let response = self.transport.get(&url)?;
        self.build_catalog(response)
    }

    /// Validate and decode a listing response, then build the catalog.
    ///
    /// # Errors
    ///
    /// Fails on a non-2xx status, a non-JSON content type or an undecodable
    /// body. Nothing else is fatal.
    pub fn build_catalog(&self, response: Response) -> Result<Catalog> {
        let response = response.error_for_status()?;
        if !response.is_json() {
            let content_type = response
                .content_type
                .unwrap_or_else(|| "no content type".to_string());
            return Err(Error::UnexpectedContentType(content_type));
        }

        let raw: RawResponse = serde_json::from_slice(&response.body)?;
        Ok(self.assemble(raw))
    }

    /// Group, filter and enrich decoded records.
    #[must_use]
    pub fn assemble(&self, raw: RawResponse) -> Catalog {
        let mut stats = CatalogStats {
            records_total: raw.records_total,
            records_seen: raw.data.len(),
            ..CatalogStats::default()
        };

        let records = decode_records(raw.data, &mut stats);
        let groups = group_by_category(records, &mut stats);
        let mut categories: Vec<Category> = Vec::with_capacity(groups.len());

        for (id, group) in groups {
            info!(
                category = id,
                name = %group.name,
                dorks = group.records.len(),
                "Category {id} ('{}') has {} dorks",
                group.name,
                group.records.len()
            );

            let entries = self.build_entries(&group.records, &mut stats);

            // Two ids sharing a title merge under the first one.
            match categories.iter().position(|c| c.name == group.name) {
                Some(index) => categories[index].entries.extend(entries),
                None => categories.push(Category {
                    id,
                    name: group.name,
                    entries,
                }),
            }
        }

        stats.entries_emitted = categories.iter().map(|c| c.entries.len()).sum();
        info!(
            records_total = stats.records_total,
            entries = stats.entries_emitted,
            discarded = stats.discarded_short,
            malformed = stats.skipped_malformed,
            "Catalog assembled"
        );

        Catalog::new(categories, stats)
    }

    /// Fetch, write to `path` and return the catalog.
    pub fn run(&self, path: &Path) -> Result<Catalog> {
        let catalog = self.fetch_catalog()?;

        output::write_catalog(&catalog, path, self.options.pretty)?;
        if self.options.split_categories {
            output::write_category_files(&catalog, path, self.options.pretty)?;
        }

        info!(
            "Total Google dorks retrieved: {}",
            catalog.stats().records_total
        );
        Ok(catalog)
    }

    fn build_entries(&self, records: &[RawRecord], stats: &mut CatalogStats) -> Vec<Entry> {
        let candidates: Vec<Candidate> = records
            .iter()
            .filter_map(|record| self.candidate(record, stats))
            .collect();

        let hrefs: Vec<&str> = candidates.iter().map(|c| c.href.as_str()).collect();
        let descriptions = self.fetch_all(&hrefs);

        candidates
            .into_iter()
            .zip(descriptions)
            .map(|(candidate, outcome)| {
                match &outcome {
                    Ok(description) if description.is_empty() => {
                        stats.descriptions_missing += 1;
                        info!(dork = %candidate.dork, "NULL DESCRIPTION FOR {}", candidate.dork);
                    }
                    Ok(_) => {}
                    Err(_) => stats.descriptions_failed += 1,
                }
                let description = or_empty(&candidate.href, outcome);
                Entry {
                    dork: candidate.dork,
                    description,
                }
            })
            .collect()
    }

    /// Extract and filter one record. `None` means it was skipped.
    fn candidate(&self, record: &RawRecord, stats: &mut CatalogStats) -> Option<Candidate> {
        let (extracted, href) = match extract_dork_and_link(&record.url_title) {
            Ok(pair) => pair,
            Err(err) => {
                stats.skipped_malformed += 1;
                warn!(error = %err, "Skipping record with malformed markup");
                return None;
            }
        };

        let normalized = normalize(&extracted);
        let normalized = normalized.trim();
        if normalized.chars().count() <= self.options.min_dork_len {
            stats.discarded_short += 1;
            debug!(dork = %extracted, "Discarding short dork");
            return None;
        }

        let dork = if self.options.store_normalized_dork {
            normalized.to_string()
        } else {
            extracted.trim().to_string()
        };

        Some(Candidate { dork, href })
    }

    /// Fetch descriptions for `hrefs`, results in the same order.
    fn fetch_all(&self, hrefs: &[&str]) -> Vec<std::result::Result<String, FetchError>> {
        let fetcher = DescriptionFetcher::new(self.transport, self.options);
        let workers = self.options.workers();

        if workers == 1 || hrefs.len() < 2 {
            return hrefs.iter().map(|href| fetcher.fetch(href)).collect();
        }

        // Contiguous chunks joined in spawn order keep listing order.
        let chunk_size = hrefs.len().div_ceil(workers);
        let fetcher = &fetcher;
        thread::scope(|scope| {
            let handles: Vec<_> = hrefs
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk.iter().map(|href| fetcher.fetch(href)).collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }
}

/// Decode listing records one by one, skipping those that do not fit.
fn decode_records(values: Vec<serde_json::Value>, stats: &mut CatalogStats) -> Vec<RawRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match RawRecord::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                stats.skipped_malformed += 1;
                warn!(index, error = %err, "Skipping undecodable record");
                None
            }
        })
        .collect()
}

/// Bucket records by numeric category id, ascending.
fn group_by_category(records: Vec<RawRecord>, stats: &mut CatalogStats) -> BTreeMap<u32, Group> {
    let mut groups: BTreeMap<u32, Group> = BTreeMap::new();

    for record in records {
        let Some(id) = record.category.cat_id.parse() else {
            stats.skipped_malformed += 1;
            warn!(cat_id = ?record.category.cat_id, "Skipping record with invalid category id");
            continue;
        };

        let group = groups.entry(id).or_insert_with(|| Group {
            name: record.category.cat_title.clone(),
            records: Vec::new(),
        });
        if group.name != record.category.cat_title {
            debug!(
                category = id,
                kept = %group.name,
                ignored = %record.category.cat_title,
                "Category title differs from first seen"
            );
        }
        group.records.push(record);
    }

    groups
}
