//! Entity catalogs: conditions, cities, and services.
//!
//! The catalogs are the static data the route combinator expands. They live
//! as three TOML files in a catalog directory:
//!
//! ```text
//! catalog/
//! ├── conditions.toml    # [[conditions]] entries
//! ├── cities.toml        # [[cities]] entries
//! └── services.toml      # [[services]] entries
//! ```
//!
//! Entry shape:
//!
//! ```toml
//! [[conditions]]
//! slug = "keratoconus"
//! name = "Keratoconus"
//! category = "Corneal"
//! aliases = ["conical cornea"]
//! icd_code = "H18.60"
//! symptoms = ["blurred vision", "light sensitivity"]
//!
//! [[cities]]
//! slug = "irvine"
//! name = "Irvine"
//! county = "Orange"
//! population = 314621
//! neighborhoods = ["Woodbridge", "Northwood"]
//! zip_codes = ["92602", "92604"]
//!
//! [[services]]
//! slug = "lasik"
//! name = "LASIK Eye Surgery"
//! description = "Bladeless laser vision correction."
//! ```
//!
//! Catalogs are loaded once at startup and immutable afterwards. Loading is
//! strict: a missing or empty `slug`, or a duplicate `slug` within one list,
//! aborts the load. The route set's global URL uniqueness rests on slug
//! uniqueness here, so a malformed catalog must fail the build rather than
//! produce a partial route set. Unknown keys are rejected to catch typos.
//!
//! An empty list (or an entirely empty file) is valid — the corresponding
//! route groups are simply empty.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error reading {file}: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {file}: {source}")]
    Toml {
        file: String,
        source: toml::de::Error,
    },
    #[error("missing or empty slug in {file} (entry name: {name:?})")]
    EmptySlug { file: String, name: String },
    #[error("duplicate slug \"{slug}\" in {file}")]
    DuplicateSlug { file: String, slug: String },
}

/// A medical condition the clinic treats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Condition {
    pub slug: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icd_code: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// A city in the clinic's service area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct City {
    pub slug: String,
    pub name: String,
    pub county: String,
    pub population: u32,
    #[serde(default)]
    pub neighborhoods: Vec<String>,
    #[serde(default)]
    pub zip_codes: Vec<String>,
}

/// A service offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub slug: String,
    pub name: String,
    pub description: String,
}

/// The full entity registry, loaded once at process start.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub conditions: Vec<Condition>,
    pub cities: Vec<City>,
    pub services: Vec<Service>,
}

// Per-file wrappers so each TOML file is a single array-of-tables.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConditionsFile {
    #[serde(default)]
    conditions: Vec<Condition>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct CitiesFile {
    #[serde(default)]
    cities: Vec<City>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ServicesFile {
    #[serde(default)]
    services: Vec<Service>,
}

impl Catalog {
    /// Load all three catalog files from `dir`. A file that does not exist
    /// contributes an empty list; a file that exists but fails to parse or
    /// validate aborts the load.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let conditions = load_file::<ConditionsFile>(dir, "conditions.toml")?.conditions;
        let cities = load_file::<CitiesFile>(dir, "cities.toml")?.cities;
        let services = load_file::<ServicesFile>(dir, "services.toml")?.services;

        validate_slugs(
            "conditions.toml",
            conditions.iter().map(|c| (c.slug.as_str(), c.name.as_str())),
        )?;
        validate_slugs(
            "cities.toml",
            cities.iter().map(|c| (c.slug.as_str(), c.name.as_str())),
        )?;
        validate_slugs(
            "services.toml",
            services.iter().map(|s| (s.slug.as_str(), s.name.as_str())),
        )?;

        Ok(Self {
            conditions,
            cities,
            services,
        })
    }

    /// Display name for a condition slug, if the catalog knows it.
    pub fn condition_name(&self, slug: &str) -> Option<&str> {
        self.conditions
            .iter()
            .find(|c| c.slug == slug)
            .map(|c| c.name.as_str())
    }
}

fn load_file<T>(dir: &Path, file: &str) -> Result<T, CatalogError>
where
    T: serde::de::DeserializeOwned + Default,
{
    let path = dir.join(file);
    if !path.exists() {
        return Ok(T::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
        file: file.to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| CatalogError::Toml {
        file: file.to_string(),
        source,
    })
}

/// Enforce non-empty, unique slugs within one entity list.
fn validate_slugs<'a>(
    file: &str,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (slug, name) in entries {
        if slug.trim().is_empty() {
            return Err(CatalogError::EmptySlug {
                file: file.to_string(),
                name: name.to_string(),
            });
        }
        if !seen.insert(slug.to_string()) {
            return Err(CatalogError::DuplicateSlug {
                file: file.to_string(),
                slug: slug.to_string(),
            });
        }
    }
    Ok(())
}
