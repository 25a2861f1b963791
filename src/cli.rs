//! Command-line interface definitions.
//!
//! The builder has a single action, so every argument is optional and a bare
//! `verde-sitemap` run regenerates both artifacts.

use clap::Parser;
use std::path::PathBuf;

/// Regenerate sitemap.xml and reconcile robots.txt for the published site
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Published output directory (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: verde.toml, optional)
    #[arg(short = 'C', long, default_value = "verde.toml")]
    pub config: PathBuf,

    /// Public site origin, e.g. "https://www.example.com".
    ///
    /// Takes precedence over `[base].url`. CI sets it through `SITE_URL`.
    #[arg(long = "base-url", env = "SITE_URL")]
    pub base_url: Option<String>,
}
