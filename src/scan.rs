use crate::config::Config;
use crate::error::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively discovers HTML files beneath a root directory
pub struct Scanner {
    patterns: Vec<Regex>,
}

impl Scanner {
    /// Create a scanner with the configured exclusion patterns compiled
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            patterns: config.exclude_patterns()?,
        })
    }

    /// Discover all HTML files under `root`
    ///
    /// Directories matching an exclusion pattern are pruned before descent, so
    /// their entire subtree is skipped. Files are kept only if the name ends in
    /// `.html` and the full path matches no exclusion pattern. Traversal order
    /// is whatever the filesystem yields; it is preserved into the output.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| !self.prune_dir(e));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !is_html(path) {
                continue;
            }

            // File-level check, independent of the directory-level pruning
            if self.is_excluded(path) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        Ok(files)
    }

    /// True for directories whose path matches an exclusion pattern
    fn prune_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir() && self.is_excluded(entry.path())
    }

    /// Unanchored regex search over the path string
    ///
    /// Patterns see the path as walked from the scan root, including the root
    /// itself. A root whose own path contains an excluded substring (say a
    /// checkout under a `node_modules` directory) excludes everything.
    fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|p| p.is_match(&path_str))
    }
}

fn is_html(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or(false, |n| n.ends_with(".html"))
}
