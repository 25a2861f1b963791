//! Robots.txt reconciliation.
//!
//! Keeps the `Sitemap:` directive in robots.txt pointing at the configured
//! origin. The file is only rewritten when its trimmed content differs from
//! the desired directive, so repeated builds leave it untouched.
//!
//! ```text
//! User-agent: *
//! Allow: /
//! Sitemap: https://example.com/sitemap.xml
//! ```

use crate::{
    config::{SITEMAP_FILE, SiteConfig},
    log,
};
use anyhow::{Context, Result};
use std::{fs, io::ErrorKind, path::Path};

// ============================================================================
// Public API
// ============================================================================

/// What reconciliation did to the robots file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotsOutcome {
    /// Existing content already matched; no write happened
    Unchanged,
    /// File was created or replaced
    Written,
}

/// Reconcile robots.txt with the configured origin.
pub fn build_robots(config: &SiteConfig) -> Result<RobotsOutcome> {
    let robots = RobotsTxt::new(config.origin(), config.build.robots.allow_all);
    let path = config.robots_path();
    let outcome = robots.reconcile(&path)?;

    let name = path.file_name().unwrap_or_default().to_string_lossy();
    match outcome {
        RobotsOutcome::Unchanged => log!("robots"; "{name} unchanged"),
        RobotsOutcome::Written => log!("robots"; "{name}"),
    }
    Ok(outcome)
}

// ============================================================================
// RobotsTxt Implementation
// ============================================================================

/// Desired robots directive document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsTxt {
    pub allow_all: bool,
    pub sitemap_url: String,
}

impl RobotsTxt {
    pub fn new(origin: &str, allow_all: bool) -> Self {
        Self {
            allow_all,
            sitemap_url: format!("{origin}/{SITEMAP_FILE}"),
        }
    }

    /// Render the directive, newline-terminated.
    pub fn render(&self) -> String {
        let rule = if self.allow_all { "Allow" } else { "Disallow" };
        format!("User-agent: *\n{rule}: /\nSitemap: {}\n", self.sitemap_url)
    }

    /// Write the directive to `path` unless the trimmed contents already match.
    ///
    /// A missing file counts as empty.
    pub fn reconcile(&self, path: &Path) -> Result<RobotsOutcome> {
        let desired = self.render();
        let existing = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        if existing.trim() == desired.trim() {
            return Ok(RobotsOutcome::Unchanged);
        }

        fs::write(path, desired)
            .with_context(|| format!("Failed to write robots to {}", path.display()))?;
        Ok(RobotsOutcome::Written)
    }
}

// ============================================================================
// Tests
// ============================================================================
