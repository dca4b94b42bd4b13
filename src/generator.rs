//! Pipeline orchestration: scan, classify, read mtimes, assemble, write.

use crate::classify;
use crate::config::Config;
use crate::error::Result;
use crate::freshness;
use crate::scan::Scanner;
use crate::sitemap::{Sitemap, UrlEntry};
use std::path::Path;

/// How many sample URLs the run summary prints
const SAMPLE_URLS: usize = 5;

/// Build the sitemap for the tree under `root`
///
/// Entries come out in discovery order; any per-file failure aborts the build.
pub fn build(config: &Config, root: &Path) -> Result<Sitemap> {
    let scanner = Scanner::new(config)?;
    let files = scanner.scan(root)?;

    let mut entries = Vec::with_capacity(files.len());
    for path in &files {
        let loc = classify::page_url(config, root, path);
        let lastmod = freshness::last_modified(path)?;
        let (priority, changefreq) = classify::page_rule(config, root, path);

        entries.push(UrlEntry {
            loc,
            lastmod,
            changefreq: changefreq.to_string(),
            priority: priority.to_string(),
        });
    }

    Ok(Sitemap::new(entries))
}

/// Run the full pipeline and print the run summary
///
/// The output file is written into `root` (the working directory when invoked
/// from the CLI). All progress lines go to stdout.
pub fn generate(config: &Config, root: &Path) -> Result<()> {
    println!("🔍 Scanning for HTML files...");

    let sitemap = build(config, root)?;
    println!("📄 Found {} HTML files", sitemap.len());

    let output_path = root.join(&config.output_file);
    sitemap.write(&output_path)?;

    println!("✅ Sitemap generated successfully: {}", config.output_file);
    println!("📊 Total URLs: {}", sitemap.len());
    println!("🌐 Base URL: {}", config.base_url);

    println!("\n📋 Sample URLs:");
    for entry in sitemap.entries().iter().take(SAMPLE_URLS) {
        println!("   - {}", entry.loc);
    }
    if sitemap.len() > SAMPLE_URLS {
        println!("   ... and {} more", sitemap.len() - SAMPLE_URLS);
    }

    Ok(())
}
