//! `[build]` section configuration.
//!
//! Contains the published output root plus sitemap and robots settings.

use super::defaults;
use crate::pages::ChangeFreq;
use educe::Educe;
use serde::Deserialize;
use std::path::PathBuf;

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in verde.toml.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"        # Published HTML root
///
/// [build.sitemap]
/// exclude = ["404.html", "es/404.html"]
///
/// [build.robots]
/// allow_all = true
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Published output directory scanned for `.html` files.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Robots file settings.
    #[serde(default)]
    pub robots: RobotsConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.sitemap]` section.
///
/// The file itself is always `sitemap.xml` in the output root, the location
/// robots.txt advertises.
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Change frequency hint attached to every entry.
    #[serde(default = "defaults::build::sitemap::changefreq")]
    #[educe(Default = defaults::build::sitemap::changefreq())]
    pub changefreq: ChangeFreq,

    /// Output-relative paths that never appear in the sitemap.
    #[serde(default = "defaults::build::sitemap::exclude")]
    #[educe(Default = defaults::build::sitemap::exclude())]
    pub exclude: Vec<String>,

    /// Regex patterns matched against output-relative paths.
    #[serde(default = "defaults::build::sitemap::exclude_patterns")]
    #[educe(Default = defaults::build::sitemap::exclude_patterns())]
    pub exclude_patterns: Vec<String>,
}

/// `[build.robots]` section. The file is always `robots.txt` in the output root.
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RobotsConfig {
    /// Enable robots.txt reconciliation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// `Allow: /` when true, `Disallow: /` otherwise (staging hosts).
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub allow_all: bool,
}

// ============================================================================
// Tests
// ============================================================================
