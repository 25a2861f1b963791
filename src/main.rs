//! verde-sitemap - sitemap.xml and robots.txt builder for the Verde
//! Landscaping static site.

mod build;
mod cli;
mod config;
mod generator;
mod logger;
mod pages;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;
use generator::RobotsOutcome;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;
    log!("config"; "origin {}", config.origin());

    let report = build_site(&config)?;
    let sitemap = report
        .entries
        .map_or_else(|| "sitemap skipped".to_owned(), |n| format!("{n} urls"));
    let robots = match report.robots {
        Some(RobotsOutcome::Written) => "robots updated",
        Some(RobotsOutcome::Unchanged) => "robots unchanged",
        None => "robots skipped",
    };
    log!("build"; "done: {sitemap}, {} excluded, {robots}", report.excluded);
    Ok(())
}
