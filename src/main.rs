use clap::{Parser, Subcommand};
use sightmap::{catalog, config, gallery, output, routes, scan, sitemap};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "sightmap")]
#[command(about = "Sitemap and clinical-gallery generator for the Clearview site")]
#[command(long_about = "\
Sitemap and clinical-gallery generator for the Clearview site

Entity catalogs are the data source. Three TOML files expand into the full
route set with SEO weights, and a flat directory of clinical image filenames
is classified into per-condition galleries.

Inputs:

  sightmap.toml                # Site config (optional, defaults apply)
  catalog/
  ├── conditions.toml          # [[conditions]] slug/name/category/...
  ├── cities.toml              # [[cities]] slug/name/county/...
  └── services.toml            # [[services]] slug/name/description
  images/                      # Flat pool of clinical image exports
      keratoconus_cornea_topography_01.jpg
      dryeye_tear_film_break_up.png
      ...

Outputs (consumed by the site build):

  dist/sitemap.xml             # urlset with lastmod/changefreq/priority
  dist/routes.json             # route set as JSON
  dist/galleries.json          # condition → ordered image list

Route groups, in output order: static pages, conditions, cities, services,
service × (city + region default), condition × city. Group sizes follow
catalog sizes exactly; run 'sightmap check' to validate catalogs and URL
uniqueness without writing anything.")]
#[command(version = version_string())]
struct Cli {
    /// Site config file
    #[arg(long, default_value = "sightmap.toml", global = true)]
    config: PathBuf,

    /// Catalog directory (overrides config)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Clinical image directory (overrides config)
    #[arg(long, global = true)]
    images: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate sitemap.xml and routes.json from the catalogs
    Routes,
    /// Generate galleries.json from the image pool
    Galleries,
    /// Generate all outputs: routes + galleries
    Build,
    /// Validate catalogs and route-set uniqueness without writing output
    Check,
    /// Print gallery and route totals
    Stats,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let site = config::SiteConfig::load(&cli.config)?;
    let catalog_dir = cli
        .catalog
        .clone()
        .unwrap_or_else(|| PathBuf::from(&site.catalog_dir));
    let images_dir = cli
        .images
        .clone()
        .unwrap_or_else(|| PathBuf::from(&site.images_dir));

    match cli.command {
        Command::Routes => {
            let catalog = catalog::Catalog::load(&catalog_dir)?;
            let routes = build_checked_routes(&catalog, &site)?;
            std::fs::create_dir_all(&cli.output)?;
            sitemap::write_sitemap(&cli.output, &routes)?;
            sitemap::write_routes_json(&cli.output, &routes)?;
            output::print_route_summary(&routes::group_counts(&catalog, &policy(&site)));
        }
        Command::Galleries => {
            let catalog = catalog::Catalog::load(&catalog_dir)?;
            let pool = scan::scan_pool(&images_dir)?;
            let index = gallery::GalleryIndex::build(&pool);
            std::fs::create_dir_all(&cli.output)?;
            sitemap::write_galleries_json(&cli.output, &index)?;
            output::print_gallery_summary(&index, &catalog);
        }
        Command::Build => {
            let catalog = catalog::Catalog::load(&catalog_dir)?;

            println!("==> Routes");
            let routes = build_checked_routes(&catalog, &site)?;
            std::fs::create_dir_all(&cli.output)?;
            sitemap::write_sitemap(&cli.output, &routes)?;
            sitemap::write_routes_json(&cli.output, &routes)?;
            output::print_route_summary(&routes::group_counts(&catalog, &policy(&site)));

            println!("==> Galleries");
            let pool = scan::scan_pool(&images_dir)?;
            let index = gallery::GalleryIndex::build(&pool);
            sitemap::write_galleries_json(&cli.output, &index)?;
            output::print_gallery_summary(&index, &catalog);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", catalog_dir.display());
            let catalog = catalog::Catalog::load(&catalog_dir)?;
            build_checked_routes(&catalog, &site)?;
            output::print_route_summary(&routes::group_counts(&catalog, &policy(&site)));

            if images_dir.exists() {
                let pool = scan::scan_pool(&images_dir)?;
                let index = gallery::GalleryIndex::build(&pool);
                output::print_gallery_summary(&index, &catalog);
            }
            println!("==> Content is valid");
        }
        Command::Stats => {
            let catalog = catalog::Catalog::load(&catalog_dir)?;
            output::print_route_summary(&routes::group_counts(&catalog, &policy(&site)));
            let pool = scan::scan_pool(&images_dir)?;
            let index = gallery::GalleryIndex::build(&pool);
            println!("{}", output::format_stats_line(&index));
        }
    }

    Ok(())
}

/// Route policy from config plus the build timestamp.
fn policy(site: &config::SiteConfig) -> routes::RoutePolicy {
    routes::RoutePolicy {
        base_url: site.base_url.clone(),
        static_pages: site.static_pages.clone(),
        region_slug: site.region_slug.clone(),
        built_at: chrono::Utc::now(),
    }
}

/// Build the route set and enforce global URL uniqueness. Duplicate URLs are
/// a catalog problem (e.g. a city slug colliding with the region slug) and
/// fail the build before anything is written.
fn build_checked_routes(
    catalog: &catalog::Catalog,
    site: &config::SiteConfig,
) -> Result<Vec<routes::RouteEntry>, Box<dyn std::error::Error>> {
    let routes = routes::build_routes(catalog, &policy(site));
    let duplicates = routes::find_duplicate_urls(&routes);
    if !duplicates.is_empty() {
        return Err(format!("duplicate route URLs: {}", duplicates.join(", ")).into());
    }
    Ok(routes)
}
