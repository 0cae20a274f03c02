//! Serialization of the generated content graph.
//!
//! Three output files, all consumed by the site build (an external
//! collaborator — this tool renders no pages):
//!
//! - `sitemap.xml` — the standard urlset document served at `/sitemap.xml`.
//! - `routes.json` — the route set as JSON, for the page-generation
//!   machinery (`{ url, lastModified, changeFrequency, priority }`).
//! - `galleries.json` — the condition → gallery mapping for condition
//!   detail pages.
//!
//! `lastmod` in the XML uses the W3C datetime profile (RFC 3339, which
//! chrono's `to_rfc3339` emits); the JSON carries full ISO-8601 timestamps
//! via serde.

use crate::gallery::GalleryIndex;
use crate::routes::RouteEntry;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Render the urlset document for a route set.
pub fn sitemap_xml(routes: &[RouteEntry]) -> String {
    let mut xml = String::with_capacity(routes.len() * 160 + 128);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for route in routes {
        // Infallible: writing to a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&route.url),
            route.last_modified.to_rfc3339(),
            route.change_frequency.as_str(),
            route.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Write `sitemap.xml` into `output_dir`.
pub fn write_sitemap(output_dir: &Path, routes: &[RouteEntry]) -> io::Result<()> {
    fs::write(output_dir.join("sitemap.xml"), sitemap_xml(routes))
}

/// Write `routes.json` into `output_dir`.
pub fn write_routes_json(output_dir: &Path, routes: &[RouteEntry]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(routes)?;
    fs::write(output_dir.join("routes.json"), json)
}

/// Write `galleries.json` into `output_dir`.
pub fn write_galleries_json(output_dir: &Path, index: &GalleryIndex) -> io::Result<()> {
    let json = serde_json::to_string_pretty(index)?;
    fs::write(output_dir.join("galleries.json"), json)
}

/// Escape the five XML-significant characters. URLs are the only
/// interpolated data and ampersands in query strings do occur.
fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
