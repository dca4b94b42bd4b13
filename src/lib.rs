//! Sitemapper - generate sitemap.xml for static HTML sites
//!
//! Walks the working directory for `.html` files, derives a canonical URL for
//! each, assigns priority/changefreq via ordered path-pattern rules, and
//! writes a sitemaps.org 0.9 document.

pub mod classify;
pub mod config;
pub mod error;
pub mod freshness;
pub mod generator;
pub mod scan;
pub mod sitemap;

// Re-export main types
pub use config::{Config, UrlRule};
pub use error::{Error, Result};
pub use sitemap::{Sitemap, UrlEntry};
