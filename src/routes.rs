//! Route combinator: the full sitemap entry set with SEO weights.
//!
//! Expands the entity catalogs into every page the site exposes. Groups are
//! concatenated in a fixed order, and entries within a group follow catalog
//! order — the combinator never sorts, skips, or special-cases entities, so
//! the output size is exactly determined by the catalog sizes:
//!
//! | Group | URL shape | Priority | Count |
//! |-------|-----------|----------|-------|
//! | Static pages | `/`, `/{page}` | 1.0 home, 0.8 rest | `S` |
//! | Conditions | `/conditions/{c}` | 0.7 | `N` |
//! | Cities | `/locations/{city}` | 0.7 | `M` |
//! | Services | `/services/{svc}` | 0.9 | `K` |
//! | Service × (City ∪ region) | `/services/{svc}/{city}` | 0.6 | `K × (M + 1)` |
//! | Condition × City | `/conditions/{c}/{city}` | 0.8 | `N × M` |
//!
//! Condition×city pages outrank single-service combination pages (0.8 vs
//! 0.6): "keratoconus treatment in Irvine" is the query the practice actually
//! wins on, so local condition pages carry the weight.
//!
//! Every entry shares one build timestamp and `ChangeFrequency::Monthly`.
//! These are build policy, not per-entity data.
//!
//! An empty catalog list contributes an empty group, never an error. Global
//! URL uniqueness is a hard build requirement; [`find_duplicate_urls`] backs
//! the `check` command and is run before any sitemap is written.

use crate::catalog::Catalog;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// Sitemap change-frequency hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// Lowercase token used in `<changefreq>` elements.
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// One sitemap entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    /// Absolute URL (base URL + relative path).
    pub url: String,
    /// Shared build timestamp, ISO-8601 in JSON output.
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    /// SEO weight in `[0.0, 1.0]`.
    pub priority: f64,
}

// Priority policy. The combinator is the single place these live.
const PRIORITY_HOME: f64 = 1.0;
const PRIORITY_STATIC: f64 = 0.8;
const PRIORITY_CONDITION: f64 = 0.7;
const PRIORITY_CITY: f64 = 0.7;
const PRIORITY_SERVICE: f64 = 0.9;
const PRIORITY_SERVICE_CITY: f64 = 0.6;
const PRIORITY_CONDITION_CITY: f64 = 0.8;

/// Inputs the combinator needs beyond the catalog: build-policy constants
/// and site identity from config.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    /// Absolute site origin, no trailing slash (`https://example.com`).
    pub base_url: String,
    /// Relative static page paths; `""` is the home page.
    pub static_pages: Vec<String>,
    /// Slug for the region-default service-area page.
    pub region_slug: String,
    /// Build timestamp shared by every entry.
    pub built_at: DateTime<Utc>,
}

/// Per-group entry counts, for display and for sanity checks. Cross-product
/// sizing is multiplicative and exact, so these are computable from catalog
/// sizes alone; `total()` must equal the generated route count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCounts {
    pub static_pages: usize,
    pub conditions: usize,
    pub cities: usize,
    pub services: usize,
    pub service_city: usize,
    pub condition_city: usize,
}

impl GroupCounts {
    pub fn total(&self) -> usize {
        self.static_pages
            + self.conditions
            + self.cities
            + self.services
            + self.service_city
            + self.condition_city
    }
}

/// Expand catalogs into the full route set. Deterministic: same catalog and
/// policy in, same entries out, in the same order.
pub fn build_routes(catalog: &Catalog, policy: &RoutePolicy) -> Vec<RouteEntry> {
    let mut routes = Vec::with_capacity(route_capacity(catalog, policy));

    let entry = |path: &str, priority: f64| RouteEntry {
        url: join_url(&policy.base_url, path),
        last_modified: policy.built_at,
        change_frequency: ChangeFrequency::Monthly,
        priority,
    };

    for page in &policy.static_pages {
        let priority = if page.is_empty() {
            PRIORITY_HOME
        } else {
            PRIORITY_STATIC
        };
        routes.push(entry(page, priority));
    }

    for condition in &catalog.conditions {
        routes.push(entry(
            &format!("conditions/{}", condition.slug),
            PRIORITY_CONDITION,
        ));
    }

    for city in &catalog.cities {
        routes.push(entry(&format!("locations/{}", city.slug), PRIORITY_CITY));
    }

    for service in &catalog.services {
        routes.push(entry(
            &format!("services/{}", service.slug),
            PRIORITY_SERVICE,
        ));
    }

    // Service × (City ∪ {region default}): per-city pages in catalog order,
    // then the region-wide service-area page.
    for service in &catalog.services {
        for city in &catalog.cities {
            routes.push(entry(
                &format!("services/{}/{}", service.slug, city.slug),
                PRIORITY_SERVICE_CITY,
            ));
        }
        routes.push(entry(
            &format!("services/{}/{}", service.slug, policy.region_slug),
            PRIORITY_SERVICE_CITY,
        ));
    }

    // Condition × City: exactly N × M entries, conditions outer.
    for condition in &catalog.conditions {
        for city in &catalog.cities {
            routes.push(entry(
                &format!("conditions/{}/{}", condition.slug, city.slug),
                PRIORITY_CONDITION_CITY,
            ));
        }
    }

    routes
}

/// Per-group counts for a catalog and policy. Matches the grouping of
/// [`build_routes`] exactly.
pub fn group_counts(catalog: &Catalog, policy: &RoutePolicy) -> GroupCounts {
    GroupCounts {
        static_pages: policy.static_pages.len(),
        conditions: catalog.conditions.len(),
        cities: catalog.cities.len(),
        services: catalog.services.len(),
        service_city: catalog.services.len() * (catalog.cities.len() + 1),
        condition_city: catalog.conditions.len() * catalog.cities.len(),
    }
}

/// URLs appearing more than once in the route set, in first-seen order.
/// A non-empty result is a build-breaking catalog problem.
pub fn find_duplicate_urls(routes: &[RouteEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for route in routes {
        if !seen.insert(route.url.as_str()) && reported.insert(route.url.as_str()) {
            duplicates.push(route.url.clone());
        }
    }
    duplicates
}

fn route_capacity(catalog: &Catalog, policy: &RoutePolicy) -> usize {
    group_counts(catalog, policy).total()
}

/// Join base URL and relative path. The empty path is the home page and maps
/// to `{base}/`.
fn join_url(base_url: &str, path: &str) -> String {
    if path.is_empty() {
        format!("{}/", base_url)
    } else {
        format!("{}/{}", base_url, path)
    }
}
