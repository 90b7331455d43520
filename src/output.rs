//! Writing catalogs to disk.
//!
//! The combined file maps category names to entries. Per-category files hold
//! a bare entry array and live in a sibling `<stem>_categories/` directory.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;

/// Serialize `catalog` to `path`, creating parent directories.
///
/// An existing file is overwritten.
pub fn write_catalog(catalog: &Catalog, path: &Path, pretty: bool) -> Result<()> {
    write_json(catalog, path, pretty)?;
    info!(path = %path.display(), entries = catalog.len(), "Wrote catalog");
    Ok(())
}

/// Write one `<id>_<slug>.json` file per category and return their paths.
pub fn write_category_files(catalog: &Catalog, path: &Path, pretty: bool) -> Result<Vec<PathBuf>> {
    let dir = category_dir(path);
    let mut written = Vec::with_capacity(catalog.categories().len());

    for category in catalog.categories() {
        let file = dir.join(format!("{:02}_{}.json", category.id, category_slug(&category.name)));
        write_json(&category.entries, &file, pretty)?;
        written.push(file);
    }

    info!(dir = %dir.display(), files = written.len(), "Wrote category files");
    Ok(written)
}

/// Directory the per-category files for `path` go into.
#[must_use]
pub fn category_dir(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("catalog");
    path.with_file_name(format!("{stem}_categories"))
}

/// Lowercase ASCII slug of a category name: `"Files Containing Juicy Info"`
/// becomes `files_containing_juicy_info`.
#[must_use]
pub fn category_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('_') && !slug.is_empty() {
            slug.push('_');
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("category");
    }
    slug
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value).map_err(std::io::Error::from)?;
    } else {
        serde_json::to_writer(&mut writer, value).map_err(std::io::Error::from)?;
    }
    writer.flush()?;
    Ok(())
}
