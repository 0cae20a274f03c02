//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric: the primary display for every entity is
//! its semantic identity (group name, condition name), with counts as
//! detail. Each command prints a compact inventory of what was generated,
//! not a stream of file paths.
//!
//! ```text
//! Routes
//!     static pages        6
//!     conditions         12
//!     cities             10
//!     services            8
//!     service × city     88
//!     condition × city  120
//!     total             244
//!
//! Galleries
//! 001 Keratoconus (4 images)
//! 002 Dry Eye Syndrome (2 images)
//!
//! 6 images across 2 conditions, 3 unclassified, 1 duplicate discarded
//! ```
//!
//! # Architecture
//!
//! Each surface has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::catalog::Catalog;
use crate::gallery::GalleryIndex;
use crate::routes::GroupCounts;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Routes
// ============================================================================

/// Per-group route counts, aligned in a small table.
pub fn format_route_summary(counts: &GroupCounts) -> Vec<String> {
    let rows = [
        ("static pages", counts.static_pages),
        ("conditions", counts.conditions),
        ("cities", counts.cities),
        ("services", counts.services),
        ("service × city", counts.service_city),
        ("condition × city", counts.condition_city),
        ("total", counts.total()),
    ];
    let width = rows.iter().map(|(_, n)| n.to_string().len()).max().unwrap_or(1);

    let mut lines = vec!["Routes".to_string()];
    for (label, n) in rows {
        lines.push(format!("    {:<18}{:>width$}", label, n));
    }
    lines
}

pub fn print_route_summary(counts: &GroupCounts) {
    for line in format_route_summary(counts) {
        println!("{line}");
    }
}

// ============================================================================
// Galleries
// ============================================================================

/// One header line per condition with images, catalog display name when the
/// catalog knows the slug, then the aggregate line.
pub fn format_gallery_summary(index: &GalleryIndex, catalog: &Catalog) -> Vec<String> {
    let mut lines = vec!["Galleries".to_string()];

    for (pos, (slug, images)) in index.iter().enumerate() {
        let name = catalog.condition_name(slug).unwrap_or(slug);
        let noun = if images.len() == 1 { "image" } else { "images" };
        lines.push(format!(
            "{} {} ({} {})",
            format_index(pos + 1),
            name,
            images.len(),
            noun
        ));
    }

    if index.conditions_with_images().is_empty() {
        lines.push("    (no classified images)".to_string());
    }

    lines.push(String::new());
    lines.push(format_stats_line(index));
    lines
}

pub fn print_gallery_summary(index: &GalleryIndex, catalog: &Catalog) {
    for line in format_gallery_summary(index, catalog) {
        println!("{line}");
    }
}

/// Aggregate line: stats plus the excluded-entry breakdown.
pub fn format_stats_line(index: &GalleryIndex) -> String {
    let mut line = index.stats().to_string();
    if index.unclassified() > 0 {
        line.push_str(&format!(", {} unclassified", index.unclassified()));
    }
    if index.duplicates() > 0 {
        let noun = if index.duplicates() == 1 {
            "duplicate"
        } else {
            "duplicates"
        };
        line.push_str(&format!(", {} {} discarded", index.duplicates(), noun));
    }
    line
}
