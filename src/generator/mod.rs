//! Crawler-facing artifacts written into the output root.
//!
//! - **sitemap**: `sitemap.xml`, fully regenerated every build
//! - **robots**: `robots.txt`, rewritten only when its directive changes

pub mod robots;
pub mod sitemap;

pub use robots::{RobotsOutcome, build_robots};
pub use sitemap::build_sitemap;
