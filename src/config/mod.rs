//! Site configuration management for `verde.toml`.
//!
//! # Sections
//!
//! | Section            | Purpose                                   |
//! |--------------------|-------------------------------------------|
//! | `[base]`           | Public site origin                        |
//! | `[build]`          | Published output root                     |
//! | `[build.sitemap]`  | Sitemap path, exclusions, change frequency |
//! | `[build.robots]`   | Robots path and crawl policy              |
//!
//! The file is optional: without it every value falls back to its default,
//! which keeps the build a no-argument step in CI.
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://www.verdelandscaping.com"
//!
//! [build]
//! output = "public"
//!
//! [build.sitemap]
//! exclude = ["404.html"]
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

use base::BaseConfig;
use build::BuildConfig;
pub use error::ConfigError;

use crate::cli::Cli;
use crate::pages::Exclusions;
use anyhow::Result;
use educe::Educe;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use url::Url;

/// Sitemap file name inside the output root, as advertised by robots.txt.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Robots file name inside the output root.
pub const ROBOTS_FILE: &str = "robots.txt";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing verde.toml
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Public site identity
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config file named by the CLI (if present), apply overrides
    /// and validate the result.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli, root);
        config.validate()?;

        Ok(config)
    }

    /// Site origin without trailing slash.
    pub fn origin(&self) -> &str {
        &self.base.url
    }

    /// Absolute path of the generated sitemap.
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(SITEMAP_FILE)
    }

    /// Absolute path of the reconciled robots file.
    pub fn robots_path(&self) -> PathBuf {
        self.build.output.join(ROBOTS_FILE)
    }

    /// Compile the sitemap exclusion rules.
    pub fn exclusions(&self) -> Result<Exclusions, ConfigError> {
        Exclusions::new(
            &self.build.sitemap.exclude,
            &self.build.sitemap.exclude_patterns,
        )
        .map_err(|err| ConfigError::Validation(format!("[build.sitemap.exclude_patterns] {err}")))
    }

    /// Update configuration with CLI arguments and resolve the output root
    /// against the project `root`.
    ///
    /// A blank `--base-url` (e.g. `SITE_URL=""` in CI) counts as not given.
    pub fn update_with_cli(&mut self, cli: &Cli, root: &Path) {
        let base_url = cli.base_url.as_ref().filter(|url| !url.trim().is_empty());

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.base.url, base_url);

        let root = Self::normalize_path(root);
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_origin(&self.base.url)?;
        self.exclusions()?;
        Ok(())
    }
}

/// Check that `origin` is an absolute http(s) URL made of scheme and host only.
///
/// The value is written verbatim into sitemap and robots, so it must already
/// be in the canonical form `Url` would serialize it to.
fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::Origin(origin.to_owned(), reason.to_owned());

    if origin.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid("must not contain whitespace or control characters"));
    }

    let url = Url::parse(origin).map_err(|err| invalid(&err.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host"));
    }
    if origin.ends_with('/') {
        return Err(invalid("must not end with a trailing slash"));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not contain a path, query or fragment"));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid("must not contain credentials"));
    }
    let canonical = url.as_str().trim_end_matches('/');
    if canonical != origin {
        return Err(invalid(&format!("not in canonical form, expected `{canonical}`")));
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
