//! Per-condition clinical image galleries.
//!
//! Turns the flat filename pool into an ordered gallery per condition. This
//! is the second half of the content graph: condition detail pages look up
//! their gallery here, keyed by condition slug.
//!
//! # Build pipeline
//!
//! For each filename, in pool order:
//!
//! 1. Classify via [`classify::classify`] — unmatched filenames are dropped,
//!    never an error.
//! 2. Derive the display title and its normalized form.
//! 3. Dedup within the condition: the first image seen for each normalized
//!    title is kept, later ones discarded. This models the same photo
//!    re-exported under a near-identical name (`..._01.jpg` vs
//!    `..._01_dup.jpg`). First-seen-wins makes the result depend on pool
//!    enumeration order, which is why [`scan`](crate::scan) sorts the pool
//!    lexicographically.
//!
//! After grouping, each gallery is sorted by title, case-insensitively and
//! stably. The whole build is deterministic for a given pool.
//!
//! # Lifecycle
//!
//! The index is build-once, read-many. The filename pool is static build-time
//! data, so there is no invalidation path short of a process restart. The CLI
//! builds eagerly via [`GalleryIndex::build`]; long-lived hosts can use
//! [`GalleryIndex::shared`], which gates the one build behind a `OnceLock` so
//! concurrent first callers cannot race to build divergent indexes.

use crate::classify;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

/// One classified clinical image.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalImage {
    /// Original filename within the image pool, untouched.
    pub filename: String,
    /// Display title derived from the filename, original casing kept.
    pub title: String,
    /// Slug of the condition this image documents.
    pub condition_slug: String,
}

/// Aggregate gallery totals.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryStats {
    /// Images present in galleries (classified, after dedup).
    pub total_images: usize,
    /// Conditions with at least one image.
    pub conditions_with_images: usize,
}

impl fmt::Display for GalleryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} images across {} conditions",
            self.total_images, self.conditions_with_images
        )
    }
}

/// The condition → gallery mapping, built once from the filename pool.
///
/// `BTreeMap` keeps condition iteration order deterministic for manifest
/// output and the `conditions_with_images` listing.
#[derive(Debug, Serialize)]
pub struct GalleryIndex {
    galleries: BTreeMap<String, Vec<ClinicalImage>>,
    /// Pool entries no rule matched. Not in any gallery; kept for reporting.
    unclassified: usize,
    /// Re-exports discarded by normalized-title dedup.
    duplicates: usize,
}

impl GalleryIndex {
    /// Build the index from the filename pool. Pure computation — callers own
    /// enumeration (see [`scan`](crate::scan)) and its ordering.
    pub fn build<I, S>(pool: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut galleries: BTreeMap<String, Vec<ClinicalImage>> = BTreeMap::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut unclassified = 0;
        let mut duplicates = 0;

        for filename in pool {
            let filename = filename.as_ref();
            let Some(slug) = classify::classify(filename) else {
                unclassified += 1;
                continue;
            };

            let title = classify::derive_title(filename);
            let key = (slug.to_string(), classify::normalize_title(&title));
            if !seen.insert(key) {
                duplicates += 1;
                continue;
            }

            galleries
                .entry(slug.to_string())
                .or_default()
                .push(ClinicalImage {
                    filename: filename.to_string(),
                    title,
                    condition_slug: slug.to_string(),
                });
        }

        for images in galleries.values_mut() {
            // Stable sort: equal titles keep pool order (cannot collide
            // case-insensitively anyway, dedup already folded those).
            images.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }

        Self {
            galleries,
            unclassified,
            duplicates,
        }
    }

    /// Process-wide shared index. The first caller's pool wins; the build
    /// runs exactly once even under concurrent first access. Subsequent
    /// calls return the cached index and ignore their argument.
    pub fn shared<I, S>(pool: I) -> &'static GalleryIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        static INDEX: OnceLock<GalleryIndex> = OnceLock::new();
        INDEX.get_or_init(|| GalleryIndex::build(pool))
    }

    /// Images for one condition, sorted by title. Empty slice for conditions
    /// with no matches — never an error.
    pub fn images_for(&self, condition_slug: &str) -> &[ClinicalImage] {
        self.galleries
            .get(condition_slug)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of images for one condition.
    pub fn image_count(&self, condition_slug: &str) -> usize {
        self.images_for(condition_slug).len()
    }

    /// Slugs of conditions with at least one image, in slug order.
    pub fn conditions_with_images(&self) -> Vec<&str> {
        self.galleries.keys().map(String::as_str).collect()
    }

    /// Aggregate totals across all galleries.
    pub fn stats(&self) -> GalleryStats {
        GalleryStats {
            total_images: self.galleries.values().map(Vec::len).sum(),
            conditions_with_images: self.galleries.len(),
        }
    }

    /// Pool entries excluded because no classification rule matched.
    pub fn unclassified(&self) -> usize {
        self.unclassified
    }

    /// Pool entries discarded as re-exports of an already-kept image.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Iterate galleries in slug order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ClinicalImage])> {
        self.galleries
            .iter()
            .map(|(slug, images)| (slug.as_str(), images.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(pool: &[&str]) -> GalleryIndex {
        GalleryIndex::build(pool.iter().copied())
    }

    // =========================================================================
    // Grouping and lookup
    // =========================================================================

    #[test]
    fn images_grouped_by_condition() {
        let index = build(&[
            "keratoconus_cornea_topography_01.jpg",
            "keratoconus_slitlamp_02.jpg",
            "glaucoma_optic_nerve_01.jpg",
        ]);

        assert_eq!(index.image_count("keratoconus"), 2);
        assert_eq!(index.image_count("glaucoma"), 1);
        assert_eq!(index.conditions_with_images(), vec!["glaucoma", "keratoconus"]);
    }

    #[test]
    fn unmatched_filenames_silently_excluded() {
        let index = build(&["waiting_room.jpg", "keratoconus_map_01.jpg"]);

        assert_eq!(index.stats().total_images, 1);
        assert_eq!(index.unclassified(), 1);
    }

    #[test]
    fn unknown_condition_returns_empty_not_error() {
        let index = build(&["keratoconus_map_01.jpg"]);
        assert!(index.images_for("uveitis").is_empty());
        assert_eq!(index.image_count("uveitis"), 0);
    }

    #[test]
    fn image_count_matches_images_for_len() {
        let index = build(&[
            "keratoconus_map_01.jpg",
            "keratoconus_map_02.jpg",
            "dryeye_stain_01.jpg",
        ]);
        for slug in index.conditions_with_images() {
            assert_eq!(index.image_count(slug), index.images_for(slug).len());
        }
    }

    // =========================================================================
    // Dedup — first seen wins
    // =========================================================================

    #[test]
    fn reexport_dedup_keeps_first_seen() {
        let index = build(&[
            "keratoconus_cornea_01.jpg",
            "keratoconus_Cornea_01_dup.jpg",
            "dryeye_tear_01.jpg",
        ]);

        let kc = index.images_for("keratoconus");
        assert_eq!(kc.len(), 1);
        assert_eq!(kc[0].filename, "keratoconus_cornea_01.jpg");
        assert_eq!(index.image_count("dry-eye"), 1);
        assert_eq!(index.duplicates(), 1);
    }

    #[test]
    fn dedup_scoped_per_condition() {
        // Same normalized title under different conditions: both kept.
        let index = build(&["keratoconus_scan_01.jpg", "glaucoma_scan_01.jpg"]);
        assert_eq!(index.image_count("keratoconus"), 1);
        assert_eq!(index.image_count("glaucoma"), 1);
    }

    #[test]
    fn kept_title_retains_original_casing() {
        let index = build(&["keratoconus_Cornea_Map_01.jpg"]);
        assert_eq!(index.images_for("keratoconus")[0].title, "Cornea Map 01");
    }

    // =========================================================================
    // Ordering and determinism
    // =========================================================================

    #[test]
    fn gallery_sorted_by_title_case_insensitive() {
        let index = build(&[
            "keratoconus_Zoomed_scan.jpg",
            "keratoconus_axial_map.jpg",
            "keratoconus_Pentacam_scan.jpg",
        ]);

        let titles: Vec<&str> = index
            .images_for("keratoconus")
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Axial Map", "Pentacam Scan", "Zoomed Scan"]);
    }

    #[test]
    fn build_is_idempotent() {
        let pool = [
            "keratoconus_cornea_01.jpg",
            "keratoconus_cornea_01_dup.jpg",
            "dryeye_tear_film.png",
            "waiting_room.jpg",
        ];
        let a = GalleryIndex::build(pool);
        let b = GalleryIndex::build(pool);

        assert_eq!(a.conditions_with_images(), b.conditions_with_images());
        for slug in a.conditions_with_images() {
            assert_eq!(a.images_for(slug), b.images_for(slug));
        }
        assert_eq!(a.stats(), b.stats());
    }

    // =========================================================================
    // Stats
    // =========================================================================

    #[test]
    fn empty_pool_yields_empty_stats() {
        let index = GalleryIndex::build(Vec::<String>::new());
        assert_eq!(
            index.stats(),
            GalleryStats {
                total_images: 0,
                conditions_with_images: 0
            }
        );
        assert!(index.images_for("keratoconus").is_empty());
    }

    #[test]
    fn gallery_sizes_sum_to_total() {
        let index = build(&[
            "keratoconus_map_01.jpg",
            "keratoconus_map_02.jpg",
            "glaucoma_nerve_01.jpg",
            "lobby_photo.jpg",
        ]);

        let sum: usize = index
            .conditions_with_images()
            .iter()
            .map(|slug| index.image_count(slug))
            .sum();
        assert_eq!(sum, index.stats().total_images);
        assert_eq!(index.unclassified(), 1);
    }

    #[test]
    fn stats_display() {
        let index = build(&["keratoconus_map_01.jpg", "glaucoma_nerve_01.jpg"]);
        assert_eq!(format!("{}", index.stats()), "2 images across 2 conditions");
    }

    // =========================================================================
    // Shared index
    // =========================================================================

    #[test]
    fn shared_index_built_once() {
        let first = GalleryIndex::shared(["keratoconus_map_01.jpg"]);
        // Second caller's pool is ignored; the first build is cached.
        let second = GalleryIndex::shared(["glaucoma_nerve_01.jpg"]);

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.image_count("keratoconus"), 1);
        assert_eq!(second.image_count("glaucoma"), 0);
    }
}
