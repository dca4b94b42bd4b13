//! Maps discovered files to public URLs and priority/changefreq rules.
//!
//! Both derivations are pure functions of (config, scan root, file path).

use crate::config::{Config, HOMEPAGE_PATTERN};
use std::path::Path;

/// Derive the public URL for a discovered file
///
/// The path is made relative to the scan root with separators normalized to
/// forward slashes. A trailing `index.html` segment becomes a directory-style
/// URL; the root `index.html` becomes the bare base URL with a trailing slash.
pub fn page_url(config: &Config, root: &Path, path: &Path) -> String {
    let rel = relative_slash_path(root, path);

    let rel = if rel == "index.html" {
        String::new()
    } else if let Some(dir) = rel.strip_suffix("/index.html") {
        format!("{}/", dir)
    } else {
        rel
    };

    format!("{}/{}", config.base_url, rel)
}

/// Look up the (priority, changefreq) pair for a discovered file
///
/// The root `index.html` always takes the homepage rule, checked before any
/// generic matching. Every other path is scanned against the ordered rule list
/// (homepage entry skipped) and the first pattern occurring as a substring
/// wins; declaration order decides ties, not pattern length. No match falls
/// back to the configured defaults.
pub fn page_rule<'a>(config: &'a Config, root: &Path, path: &Path) -> (&'a str, &'a str) {
    let rel = format!("/{}", relative_slash_path(root, path));

    if rel == HOMEPAGE_PATTERN {
        if let Some(rule) = config.rules.iter().find(|r| r.pattern == HOMEPAGE_PATTERN) {
            return (&rule.priority, &rule.changefreq);
        }
    } else {
        for rule in &config.rules {
            if rule.pattern == HOMEPAGE_PATTERN {
                continue;
            }
            if rel.contains(&rule.pattern) {
                return (&rule.priority, &rule.changefreq);
            }
        }
    }

    (&config.default_priority, &config.default_changefreq)
}

/// Root-relative path joined with forward slashes regardless of platform
fn relative_slash_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join("/")
}
