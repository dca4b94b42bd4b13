// Integration tests for sitemapper

use assert_cmd::Command;
use predicates::prelude::*;
use sitemapper::{generator, Config};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The site tree from the scoopster scenario: three pages plus a dependency
/// directory that must be pruned.
fn create_site() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path();

    fs::write(root.join("index.html"), "<html></html>").unwrap();

    fs::create_dir_all(root.join("services")).unwrap();
    fs::write(root.join("services/index.html"), "<html></html>").unwrap();

    fs::create_dir_all(root.join("about")).unwrap();
    fs::write(root.join("about/team.html"), "<html></html>").unwrap();

    fs::create_dir_all(root.join("node_modules")).unwrap();
    fs::write(root.join("node_modules/ignored.html"), "<html></html>").unwrap();

    dir
}

fn sitemapper_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sitemapper").expect("binary should build");
    cmd.current_dir(dir);
    cmd
}

// ============================================================================
// Binary Tests
// ============================================================================

#[test]
fn test_run_succeeds_and_prints_summary() {
    let dir = create_site();

    sitemapper_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 HTML files"))
        .stdout(predicate::str::contains(
            "Sitemap generated successfully: sitemap.xml",
        ))
        .stdout(predicate::str::contains("Total URLs: 3"))
        .stdout(predicate::str::contains("Base URL: https://scoopster.ca"))
        .stdout(predicate::str::contains("Sample URLs:"))
        .stdout(predicate::str::contains("- https://scoopster.ca/"));
}

#[test]
fn test_run_writes_sitemap_to_working_directory() {
    let dir = create_site();

    sitemapper_in(dir.path()).assert().success();

    let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
    assert_eq!(xml.matches("<url>").count(), 3);

    // Excluded subtree contributes nothing
    assert!(!xml.contains("node_modules"));
    assert!(!xml.contains("ignored"));
}

#[test]
fn test_run_scoopster_entry_values() {
    let dir = create_site();

    sitemapper_in(dir.path()).assert().success();

    let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();

    // Homepage: directory-style URL, homepage rule
    let home = xml
        .split("<url>")
        .find(|block| block.contains("<loc>https://scoopster.ca/</loc>"))
        .expect("homepage entry missing");
    assert!(home.contains("<priority>1.0</priority>"));
    assert!(home.contains("<changefreq>weekly</changefreq>"));

    // services/index.html: directory-style URL, /services/ rule
    let services = xml
        .split("<url>")
        .find(|block| block.contains("<loc>https://scoopster.ca/services/</loc>"))
        .expect("services entry missing");
    assert!(services.contains("<priority>0.9</priority>"));
    assert!(services.contains("<changefreq>monthly</changefreq>"));

    // about/team.html: filename kept, default rule
    let team = xml
        .split("<url>")
        .find(|block| block.contains("<loc>https://scoopster.ca/about/team.html</loc>"))
        .expect("team entry missing");
    assert!(team.contains("<priority>0.6</priority>"));
    assert!(team.contains("<changefreq>monthly</changefreq>"));
}

#[test]
fn test_run_twice_is_byte_identical() {
    let dir = create_site();

    sitemapper_in(dir.path()).assert().success();
    let first = fs::read(dir.path().join("sitemap.xml")).unwrap();

    sitemapper_in(dir.path()).assert().success();
    let second = fs::read(dir.path().join("sitemap.xml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_run_with_config_file() {
    let dir = create_site();
    fs::write(
        dir.path().join("sitemapper.toml"),
        r#"
base_url = "https://example.org"
output_file = "map.xml"

[[rules]]
pattern = "/index.html"
priority = "1.0"
changefreq = "daily"
"#,
    )
    .unwrap();

    sitemapper_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Base URL: https://example.org"));

    let xml = fs::read_to_string(dir.path().join("map.xml")).unwrap();
    assert!(xml.contains("<loc>https://example.org/</loc>"));
    assert!(xml.contains("<changefreq>daily</changefreq>"));
}

#[test]
fn test_run_with_invalid_config_fails() {
    let dir = create_site();
    fs::write(
        dir.path().join("sitemapper.toml"),
        "default_changefreq = \"fortnightly\"\n",
    )
    .unwrap();

    sitemapper_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("❌ Error generating sitemap:"));
}

#[test]
fn test_run_empty_directory_succeeds() {
    let dir = TempDir::new().unwrap();

    sitemapper_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 HTML files"));

    let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
    assert!(!xml.contains("<url>"));
}

#[test]
fn test_run_truncates_sample_urls() {
    let dir = TempDir::new().unwrap();
    for i in 0..7 {
        fs::write(dir.path().join(format!("page{}.html", i)), "<html></html>").unwrap();
    }

    sitemapper_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("... and 2 more"));
}

// ============================================================================
// Library Tests
// ============================================================================

#[test]
fn test_build_preserves_discovery_order_in_document() {
    let dir = create_site();
    let sitemap = generator::build(&Config::default(), dir.path()).unwrap();

    // Whatever order the walk produced, the document reproduces it exactly
    let xml = sitemap.to_xml();
    let doc_order: Vec<usize> = sitemap
        .entries()
        .iter()
        .map(|e| xml.find(&format!("<loc>{}</loc>", e.loc)).unwrap())
        .collect();
    let mut sorted = doc_order.clone();
    sorted.sort_unstable();
    assert_eq!(doc_order, sorted);
}

#[test]
fn test_rule_order_is_first_match_wins_end_to_end() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    fs::write(dir.path().join("a/b/page.html"), "<html></html>").unwrap();

    let mut config = Config::default();
    config.rules = vec![
        sitemapper::UrlRule {
            pattern: "/a/".to_string(),
            priority: "0.9".to_string(),
            changefreq: "monthly".to_string(),
        },
        sitemapper::UrlRule {
            pattern: "/a/b/".to_string(),
            priority: "0.5".to_string(),
            changefreq: "yearly".to_string(),
        },
    ];

    let sitemap = generator::build(&config, dir.path()).unwrap();
    assert_eq!(sitemap.entries()[0].priority, "0.9");
    assert_eq!(sitemap.entries()[0].changefreq, "monthly");
}
