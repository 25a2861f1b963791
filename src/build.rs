//! Site-map build orchestration.
//!
//! One strictly sequential pass over the published output:
//!
//! ```text
//! build_site()
//!     │
//!     ├── collect_pages()   ──► scan output root, derive URL records
//!     │
//!     ├── build_sitemap()   ──► overwrite sitemap.xml
//!     │
//!     └── build_robots()    ──► rewrite robots.txt only if it differs
//! ```
//!
//! Any failure aborts the pass; nothing is retried.

use crate::{
    config::SiteConfig,
    generator::{RobotsOutcome, build_robots, build_sitemap},
    log,
    pages::collect_pages,
};
use anyhow::{Result, bail};

/// Summary of one build pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Sitemap entries written (`None` when sitemap generation is disabled)
    pub entries: Option<usize>,
    /// HTML files skipped by the exclusion rules
    pub excluded: usize,
    /// Robots reconciliation result (`None` when disabled)
    pub robots: Option<RobotsOutcome>,
}

/// Regenerate the sitemap and reconcile robots.txt for `config`.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let output = &config.build.output;

    if !output.exists() {
        bail!("Output directory {} does not exist", output.display());
    }
    if !output.is_dir() {
        bail!("Output path {} is not a directory", output.display());
    }

    let exclusions = config.exclusions()?;
    let pages = collect_pages(output, &exclusions, config.build.sitemap.changefreq)?;
    log!("pages"; "found {} pages, {} excluded", pages.len(), pages.excluded);
    if pages.is_empty() {
        log!("warn"; "no published pages under {}", output.display());
    }

    let entries = if config.build.sitemap.enable {
        Some(build_sitemap(config, &pages)?)
    } else {
        None
    };

    let robots = if config.build.robots.enable {
        Some(build_robots(config)?)
    } else {
        None
    };

    Ok(BuildReport {
        entries,
        excluded: pages.excluded,
        robots,
    })
}

// ============================================================================
// Tests
// ============================================================================
