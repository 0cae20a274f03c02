//! Filename-pool enumeration.
//!
//! The gallery builder consumes a flat list of image *filenames* — it never
//! opens image bytes. This module produces that list from the clinical image
//! directory.
//!
//! Enumeration order matters: gallery dedup is first-seen-wins, so which
//! literal file survives a near-duplicate collision depends on pool order.
//! Directory iteration order is platform-dependent, so the pool is sorted
//! lexicographically by filename before it is returned. Same directory in,
//! same pool out, on every machine.
//!
//! Nested directories are walked; only the file name (not the path) enters
//! the pool, because the export tooling flattens everything at deploy time.
//! Hidden files and non-image extensions are skipped.

use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to walk image directory: {0}")]
    Walk(#[from] walkdir::Error),
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Enumerate image filenames under `dir`, lexicographically sorted.
///
/// A missing directory is an error (the walk fails on its root); an existing
/// but empty directory yields an empty pool.
pub fn scan_pool(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut pool = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') || !has_image_extension(&name) {
            continue;
        }
        pool.push(name.to_string());
    }
    pool.sort();
    Ok(pool)
}

fn has_image_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
