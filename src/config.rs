use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Path pattern for the site homepage. A file at the scan root named
/// `index.html` always takes this rule, bypassing generic matching.
pub const HOMEPAGE_PATTERN: &str = "/index.html";

/// Legal sitemap-schema changefreq tokens
const CHANGEFREQ_VALUES: [&str; 7] = [
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

/// Main configuration
///
/// Built once at startup and passed by reference into every stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site base URL, no trailing slash
    pub base_url: String,
    /// Output file name, written to the working directory
    pub output_file: String,
    /// Exclusion patterns, matched as unanchored regexes anywhere in a path
    pub exclude: Vec<String>,
    /// Ordered priority/changefreq rules; declaration order is significant
    /// (first match wins, never longest match)
    pub rules: Vec<UrlRule>,
    /// Priority used when no rule matches
    pub default_priority: String,
    /// Changefreq used when no rule matches
    pub default_changefreq: String,
}

/// A single path-pattern rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlRule {
    /// Substring matched against the leading-slash relative path
    pub pattern: String,
    pub priority: String,
    pub changefreq: String,
}

impl UrlRule {
    fn new(pattern: &str, priority: &str, changefreq: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            priority: priority.to_string(),
            changefreq: changefreq.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://scoopster.ca".to_string(),
            output_file: "sitemap.xml".to_string(),
            exclude: vec![
                "node_modules".to_string(),
                r"\.git".to_string(),
                r"404\.html".to_string(),
            ],
            // Pages under about/ intentionally carry no rule; they take the
            // default priority/changefreq pair
            rules: vec![
                UrlRule::new(HOMEPAGE_PATTERN, "1.0", "weekly"),
                UrlRule::new("/services/", "0.9", "monthly"),
                UrlRule::new("/service-areas/", "0.9", "monthly"),
                UrlRule::new("/pricing/", "0.8", "monthly"),
                UrlRule::new("/contact/", "0.8", "monthly"),
            ],
            default_priority: "0.6".to_string(),
            default_changefreq: "monthly".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Compile the exclusion patterns
    pub fn exclude_patterns(&self) -> Result<Vec<Regex>> {
        self.exclude
            .iter()
            .map(|p| Regex::new(p).map_err(Error::from))
            .collect()
    }

    /// Validate configuration
    ///
    /// The classifier treats priority/changefreq as opaque strings, so schema
    /// legality is enforced here, once, at load time.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::config_validation("base_url must not be empty"));
        }

        if self.output_file.is_empty() {
            return Err(Error::config_validation("output_file must not be empty"));
        }

        for pattern in &self.exclude {
            Regex::new(pattern)?;
        }

        for (priority, changefreq) in self
            .rules
            .iter()
            .map(|r| (&r.priority, &r.changefreq))
            .chain(std::iter::once((
                &self.default_priority,
                &self.default_changefreq,
            )))
        {
            let value: f64 = priority.parse().map_err(|_| {
                Error::config_validation(format!("priority is not a decimal: {}", priority))
            })?;
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::config_validation(format!(
                    "priority must be between 0.0 and 1.0: {}",
                    priority
                )));
            }

            if !CHANGEFREQ_VALUES.contains(&changefreq.as_str()) {
                return Err(Error::config_validation(format!(
                    "unknown changefreq: {}",
                    changefreq
                )));
            }
        }

        Ok(())
    }
}
