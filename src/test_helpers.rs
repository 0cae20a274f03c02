//! Shared test utilities for the sightmap test suite.
//!
//! Provides a small but realistic catalog, a matching route policy with a
//! fixed timestamp, and a filename pool exercising classification, dedup,
//! and the unclassified path. Kept deliberately tiny so count assertions in
//! tests stay readable (2 conditions × 3 cities, not 12 × 10).

use crate::catalog::{Catalog, City, Condition, Service};
use crate::routes::RoutePolicy;
use chrono::{TimeZone, Utc};

/// Two conditions, three cities, two services.
pub fn sample_catalog() -> Catalog {
    Catalog {
        conditions: vec![
            Condition {
                slug: "keratoconus".into(),
                name: "Keratoconus".into(),
                category: "Corneal".into(),
                aliases: vec!["conical cornea".into()],
                icd_code: Some("H18.60".into()),
                symptoms: vec!["blurred vision".into(), "light sensitivity".into()],
            },
            Condition {
                slug: "dry-eye".into(),
                name: "Dry Eye Syndrome".into(),
                category: "Ocular Surface".into(),
                aliases: vec![],
                icd_code: Some("H04.12".into()),
                symptoms: vec!["burning".into(), "grittiness".into()],
            },
        ],
        cities: vec![
            City {
                slug: "irvine".into(),
                name: "Irvine".into(),
                county: "Orange".into(),
                population: 314_621,
                neighborhoods: vec!["Woodbridge".into()],
                zip_codes: vec!["92604".into()],
            },
            City {
                slug: "tustin".into(),
                name: "Tustin".into(),
                county: "Orange".into(),
                population: 80_276,
                neighborhoods: vec![],
                zip_codes: vec!["92780".into()],
            },
            City {
                slug: "newport-beach".into(),
                name: "Newport Beach".into(),
                county: "Orange".into(),
                population: 85_239,
                neighborhoods: vec!["Balboa Island".into()],
                zip_codes: vec!["92660".into()],
            },
        ],
        services: vec![
            Service {
                slug: "lasik".into(),
                name: "LASIK Eye Surgery".into(),
                description: "Bladeless laser vision correction.".into(),
            },
            Service {
                slug: "corneal-crosslinking".into(),
                name: "Corneal Cross-Linking".into(),
                description: "Halts keratoconus progression.".into(),
            },
        ],
    }
}

/// Route policy with a fixed timestamp so route assertions are deterministic.
pub fn sample_policy() -> RoutePolicy {
    RoutePolicy {
        base_url: "https://clearview.example".into(),
        static_pages: vec![String::new(), "about".into(), "contact".into()],
        region_slug: "orange-county".into(),
        built_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
    }
}

/// Filename pool covering classification, re-export dedup, and an
/// unclassifiable entry.
pub fn sample_pool() -> Vec<String> {
    [
        "dryeye_tear_film_break_up.png",
        "keratoconus_Cornea_01_dup.jpg",
        "keratoconus_cornea_01.jpg",
        "keratoconus_pentacam_scan.jpg",
        "waiting_room_interior.jpg",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
