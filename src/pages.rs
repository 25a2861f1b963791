//! Published page discovery and URL records.
//!
//! Turns the HTML files under the output root into [`PageUrl`] records:
//!
//! ```text
//! public/services/index.html ──► /services/   (0.8, weekly)
//! public/es/contacto/index.html ──► /es/contacto/ (0.9, weekly)
//! public/404.html ──► excluded
//! ```

use crate::log;
use anyhow::{Context, Result, anyhow};
use regex::Regex;
use serde::Deserialize;
use std::{
    fmt,
    path::{Component, Path, PathBuf},
};
use walkdir::WalkDir;

// ============================================================================
// Types
// ============================================================================

/// Sitemap `<changefreq>` hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        };
        f.write_str(s)
    }
}

/// Crawl priority in `[0.0, 1.0]`, rendered with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Priority(f32);

impl Priority {
    pub const HOME: Self = Self(1.0);
    pub const CONTACT: Self = Self(0.9);
    pub const SERVICES: Self = Self(0.8);
    pub const DEFAULT: Self = Self(0.7);
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// One sitemap entry, derived from a published HTML file.
#[derive(Debug, Clone, PartialEq)]
pub struct PageUrl {
    /// Site-root-relative URL path, always starting with `/`
    pub path: String,
    pub priority: Priority,
    pub changefreq: ChangeFreq,
}

impl PageUrl {
    pub fn new(path: String, changefreq: ChangeFreq) -> Self {
        let priority = priority_for(&path);
        Self {
            path,
            priority,
            changefreq,
        }
    }
}

/// All sitemap entries of one build, sorted by path.
#[derive(Debug, Default)]
pub struct Pages {
    pub items: Vec<PageUrl>,
    /// Number of HTML files skipped by [`Exclusions`]
    pub excluded: usize,
}

impl Pages {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageUrl> {
        self.items.iter()
    }
}

/// Pages that must never be offered to crawlers.
///
/// Both rules match the output-relative path with forward slashes and no
/// leading slash, e.g. `thanks/index.html`.
#[derive(Debug, Default)]
pub struct Exclusions {
    exact: Vec<String>,
    patterns: Vec<Regex>,
}

impl Exclusions {
    pub fn new(exact: &[String], patterns: &[String]) -> Result<Self, regex::Error> {
        let exact = exact
            .iter()
            .map(|p| p.trim_start_matches('/').to_owned())
            .collect();
        let patterns = patterns
            .iter()
            .map(String::as_str)
            .map(Regex::new)
            .collect::<Result<_, _>>()?;
        Ok(Self { exact, patterns })
    }

    pub fn is_excluded(&self, rel: &str) -> bool {
        self.exact.iter().any(|p| p == rel) || self.patterns.iter().any(|re| re.is_match(rel))
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Scan `root` for published pages and build their URL records.
pub fn collect_pages(
    root: &Path,
    exclusions: &Exclusions,
    changefreq: ChangeFreq,
) -> Result<Pages> {
    let files = collect_html_files(root)?;
    let mut pages = Pages::default();

    for file in &files {
        let rel = relative_path(root, file)?;
        if exclusions.is_excluded(&rel) {
            pages.excluded += 1;
            continue;
        }
        pages.items.push(PageUrl::new(url_path(&rel), changefreq));
    }

    pages.items.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(pages)
}

/// Collect all `.html` files under `root` recursively.
///
/// Symlinks are not followed and names that are not valid UTF-8 cannot form
/// a URL; both are skipped with a warning.
pub fn collect_html_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read {}", root.display()))?;
        let is_html = entry.path().extension().is_some_and(|ext| ext == "html");
        if !is_html {
            continue;
        }

        if entry.path_is_symlink() {
            log!("warn"; "skipping symlink {}", entry.path().display());
        } else if !entry.file_type().is_file() {
            continue;
        } else if entry.path().strip_prefix(root).ok().and_then(Path::to_str).is_none() {
            log!("warn"; "skipping non UTF-8 file name {}", entry.path().display());
        } else {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Output-relative path of `file`, joined with `/` and without a leading slash.
pub fn relative_path(root: &Path, file: &Path) -> Result<String> {
    let rel = file
        .strip_prefix(root)
        .with_context(|| format!("{} is not inside {}", file.display(), root.display()))?;

    let parts = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| anyhow!("{} is not valid UTF-8", file.display()))?;

    Ok(parts.join("/"))
}

/// URL path for an output-relative file path.
///
/// `index.html` collapses to its directory (`services/index.html` → `/services/`),
/// any other file keeps its name (`404.html` → `/404.html`).
pub fn url_path(rel: &str) -> String {
    let path = format!("/{}", rel.trim_start_matches('/'));
    match path.strip_suffix("/index.html") {
        Some(dir) => format!("{dir}/"),
        None => path,
    }
}

/// Crawl priority for a URL path. First matching rule wins.
///
/// Only the literal `/` counts as home; `/es/` falls through to the default.
pub fn priority_for(path: &str) -> Priority {
    if path == "/" {
        Priority::HOME
    } else if path.starts_with("/contact") || path.starts_with("/es/contacto") {
        Priority::CONTACT
    } else if path.starts_with("/services") || path.starts_with("/es/servicios") {
        Priority::SERVICES
    } else {
        Priority::DEFAULT
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use std::fs;
    use tempfile::TempDir;

    fn default_exclusions() -> Exclusions {
        Exclusions::new(
            &defaults::build::sitemap::exclude(),
            &defaults::build::sitemap::exclude_patterns(),
        )
        .unwrap()
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<!doctype html>").unwrap();
    }

    #[test]
    fn test_url_path_index_collapse() {
        assert_eq!(url_path("index.html"), "/");
        assert_eq!(url_path("services/index.html"), "/services/");
        assert_eq!(url_path("es/servicios/poda/index.html"), "/es/servicios/poda/");
    }

    #[test]
    fn test_url_path_plain_files() {
        assert_eq!(url_path("404.html"), "/404.html");
        assert_eq!(url_path("about.html"), "/about.html");
        // Only a whole `index.html` segment collapses; other names are kept verbatim
        assert_eq!(url_path("blog/myindex.html"), "/blog/myindex.html");
    }

    #[test]
    fn test_priority_precedence() {
        assert_eq!(priority_for("/"), Priority::HOME);
        assert_eq!(priority_for("/contact/"), Priority::CONTACT);
        assert_eq!(priority_for("/es/contacto/"), Priority::CONTACT);
        assert_eq!(priority_for("/services/"), Priority::SERVICES);
        assert_eq!(priority_for("/services/lawn-care/"), Priority::SERVICES);
        assert_eq!(priority_for("/es/servicios/"), Priority::SERVICES);
        assert_eq!(priority_for("/about/"), Priority::DEFAULT);
        assert_eq!(priority_for("/es/"), Priority::DEFAULT);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::HOME.to_string(), "1.0");
        assert_eq!(Priority::CONTACT.to_string(), "0.9");
        assert_eq!(Priority::SERVICES.to_string(), "0.8");
        assert_eq!(Priority::DEFAULT.to_string(), "0.7");
    }

    #[test]
    fn test_changefreq_display_matches_serde() {
        assert_eq!(ChangeFreq::default().to_string(), "weekly");
        assert_eq!(ChangeFreq::Monthly.to_string(), "monthly");
    }

    #[test]
    fn test_default_exclusions() {
        let ex = default_exclusions();

        assert!(ex.is_excluded("404.html"));
        assert!(ex.is_excluded("thanks/index.html"));
        assert!(ex.is_excluded("thank-you.html"));
        assert!(ex.is_excluded("es/gracias/index.html"));
        assert!(!ex.is_excluded("index.html"));
        assert!(!ex.is_excluded("es/404/index.html"));
        assert!(!ex.is_excluded("services/thanksgiving-cleanup/index.html"));
    }

    #[test]
    fn test_exact_exclusion_ignores_leading_slash() {
        let ex = Exclusions::new(&["/es/404.html".to_string()], &[]).unwrap();

        assert!(ex.is_excluded("es/404.html"));
        assert!(!ex.is_excluded("404.html"));
    }

    #[test]
    fn test_collect_html_files_skips_other_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "index.html");
        touch(dir.path(), "es/index.html");
        fs::write(dir.path().join("style.css"), "body{}").unwrap();
        fs::create_dir_all(dir.path().join("img.html")).unwrap();

        let files = collect_html_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_html_files_skips_symlinks() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "services/index.html");
        std::os::unix::fs::symlink(
            dir.path().join("services/index.html"),
            dir.path().join("servicios.html"),
        )
        .unwrap();

        let files = collect_html_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("services/index.html")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_collect_html_files_skips_non_utf8_names() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "index.html");
        let bad = dir.path().join(OsStr::from_bytes(b"caf\xe9.html"));
        fs::write(&bad, "<!doctype html>").unwrap();

        let files = collect_html_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("index.html")]);
        assert!(relative_path(dir.path(), &bad).is_err());
    }

    #[test]
    fn test_collect_pages_counts_and_order() {
        let dir = TempDir::new().unwrap();
        for rel in [
            "services/index.html",
            "index.html",
            "contact/index.html",
            "404.html",
            "thanks/index.html",
            "es/index.html",
            "es/gracias/index.html",
        ] {
            touch(dir.path(), rel);
        }

        let pages = collect_pages(dir.path(), &default_exclusions(), ChangeFreq::Weekly).unwrap();
        let paths: Vec<_> = pages.iter().map(|p| p.path.as_str()).collect();

        assert_eq!(paths, ["/", "/contact/", "/es/", "/services/"]);
        assert_eq!(pages.excluded, 3);
        assert!(pages.iter().all(|p| !p.path.contains("index.html")));
        assert!(pages.iter().all(|p| p.changefreq == ChangeFreq::Weekly));
    }

    #[test]
    fn test_collect_pages_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("public");

        let result = collect_pages(&missing, &default_exclusions(), ChangeFreq::Weekly);
        assert!(result.is_err());
    }
}
