//! Site configuration module.
//!
//! Handles loading and validating `sightmap.toml`. Configuration is sparse:
//! stock defaults cover the Clearview deployment, and a config file overrides
//! only the values it names. Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = "https://www.clearvieweyecenter.com"  # Absolute origin, no trailing slash
//! catalog_dir = "catalog"       # Directory holding the entity TOML files
//! images_dir = "images"         # Clinical image pool directory
//! region_slug = "orange-county" # Service-area page slug (Service × region default)
//!
//! # Relative static page paths; "" is the home page (priority 1.0)
//! static_pages = [
//!     "",
//!     "about",
//!     "contact",
//!     "team",
//!     "insurance",
//!     "patient-forms",
//! ]
//! ```
//!
//! The base URL is prefixed to every generated route, so its shape is
//! validated at load time: it must carry an `http(s)://` scheme and must not
//! end in `/` (the combinator adds path separators itself).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `sightmap.toml`.
///
/// All fields have defaults matching the production deployment. Config files
/// need only specify overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute site origin prefixed to every route. No trailing slash.
    pub base_url: String,
    /// Directory holding `conditions.toml` / `cities.toml` / `services.toml`.
    pub catalog_dir: String,
    /// Directory holding the clinical image pool.
    pub images_dir: String,
    /// Slug for the region-default service-area pages.
    pub region_slug: String,
    /// Relative static page paths; the empty string is the home page.
    pub static_pages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.clearvieweyecenter.com".to_string(),
            catalog_dir: "catalog".to_string(),
            images_dir: "images".to_string(),
            region_slug: "orange-county".to_string(),
            static_pages: vec![
                String::new(),
                "about".to_string(),
                "contact".to_string(),
                "team".to_string(),
                "insurance".to_string(),
                "patient-forms".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    /// Load config from `path`. Missing file means defaults; a file that
    /// exists but fails to parse or validate is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".into(),
            ));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must not end with a trailing slash".into(),
            ));
        }
        if self.region_slug.trim().is_empty() {
            return Err(ConfigError::Validation("region_slug must not be empty".into()));
        }
        Ok(())
    }
}
