//! # sightmap
//!
//! Build-time content-graph generator for the Clearview Eye Center site.
//! Small entity catalogs (conditions, cities, services) expand into tens of
//! thousands of SEO-weighted routes, and a flat pool of clinical image
//! filenames is classified into per-condition photo galleries.
//!
//! # Architecture: Two Independent Graphs
//!
//! The tool owns the two subsystems of the site with real invariants, and
//! nothing else — page rendering, forms, and embeds live in the site build
//! that consumes our output:
//!
//! ```text
//! catalogs (TOML)  →  Route Combinator   →  sitemap.xml + routes.json
//! image filenames  →  Classifier/Gallery →  galleries.json
//! ```
//!
//! Both paths are deterministic pure computation over in-memory data: same
//! catalogs and same filename pool in, byte-identical manifests out. The only
//! I/O is reading the inputs and writing the three output files.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Entity registry — condition/city/service types, TOML loading, slug validation |
//! | [`routes`] | Route combinator — grouped expansion into the full sitemap entry set |
//! | [`classify`] | Filename classifier — ordered first-match rule table, title derivation |
//! | [`gallery`] | Gallery builder — grouping, normalized-title dedup, ordering, caching |
//! | [`scan`] | Filename-pool enumeration — stable lexicographic listing of the image directory |
//! | [`sitemap`] | Output serialization — sitemap.xml, routes.json, galleries.json |
//! | [`config`] | `sightmap.toml` loading and validation |
//! | [`output`] | CLI output formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Catalog Sizes Determine Route Counts Exactly
//!
//! The combinator never sorts, skips, or special-cases entities. The
//! condition × city group is exactly N × M entries, in catalog order. An
//! off-by-one anywhere would silently change the published sitemap, so the
//! expansion is plain nested loops with the counts checked in `check`.
//!
//! ## First-Match Classification
//!
//! The classifier's rule table is an ordered list, not a lookup table.
//! Clinical filenames routinely satisfy several rules (a dry-eye stain photo
//! mentions the cornea), and the authored rule order is what resolves the
//! ambiguity. See [`classify::RULES`] for the ordering notes.
//!
//! ## First-Seen Dedup over a Sorted Pool
//!
//! Re-exported photos (`..._01.jpg` vs `..._01_dup.jpg`) collapse to one
//! gallery entry; the first filename in pool order wins. That makes pool
//! order part of the contract, which is why [`scan::scan_pool`] sorts
//! lexicographically: the kept file is the same on every machine.
//!
//! ## Build-Once Gallery Cache
//!
//! The gallery index has no invalidation path — the filename pool is static
//! build input, so a rebuild means a process restart. The CLI builds the
//! index eagerly; [`gallery::GalleryIndex::shared`] exists for long-lived
//! hosts and gates the one build behind a `OnceLock` so concurrent first
//! callers cannot race to build divergent indexes.
//!
//! ## Strict Catalogs, Forgiving Pool
//!
//! A malformed catalog (missing or duplicate slug) aborts the build — the
//! route set's global URL uniqueness rests on it. Unclassifiable filenames,
//! by contrast, are expected (staff portraits, lobby photos) and are simply
//! excluded from every gallery.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod gallery;
pub mod output;
pub mod routes;
pub mod scan;
pub mod sitemap;

#[cfg(test)]
pub(crate) mod test_helpers;
