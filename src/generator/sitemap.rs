//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing all published pages for search engine
//! indexing. The file carries no state between builds and is always fully
//! rewritten.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    log,
    pages::{ChangeFreq, Pages, Priority},
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Write the sitemap for `pages`, returning the number of entries.
pub fn build_sitemap(config: &SiteConfig, pages: &Pages) -> Result<usize> {
    let sitemap = Sitemap::from_pages(pages, config.origin());
    let count = sitemap.urls.len();
    sitemap.write(&config.sitemap_path())?;
    Ok(count)
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    changefreq: ChangeFreq,
    priority: Priority,
}

impl Sitemap {
    /// Build sitemap entries from page records, keeping their order.
    fn from_pages(pages: &Pages, origin: &str) -> Self {
        let urls = pages
            .iter()
            .map(|page| UrlEntry {
                loc: format!("{origin}{}", page.path),
                changefreq: page.changefreq,
                priority: page.priority,
            })
            .collect();

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(128 + self.urls.len() * 128);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.changefreq));
            xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, sitemap_path: &Path) -> Result<()> {
        let count = self.urls.len();
        let xml = self.into_xml();

        fs::write(sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{} ({count} urls)", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================
