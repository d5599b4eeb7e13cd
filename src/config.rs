//! Scraper configuration.
//!
//! Every value the pipeline needs lives in [`ScraperConfig`], which is passed
//! explicitly to each component. The defaults describe the swm.de site; a
//! YAML file can override any subset of the fields:
//!
//! ```yaml
//! timeout_secs: 20
//! category_paths:
//!   - hallenbaeder-muenchen
//!   - saunen-muenchen
//! output:
//!   format: json
//! ```

use crate::error::ScrapeError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

/// Serialization format of the result file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Where and how the result file is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the result file is written to.
    pub dir: String,
    /// File name prefix; the run date and extension are appended.
    pub prefix: String,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            prefix: "scraping_results_".to_string(),
            format: OutputFormat::Csv,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Origin used to absolutize relative links, without trailing slash.
    pub base_url: String,
    /// Page the category sub pages hang off.
    pub listing_url: String,
    /// Category sub pages of `listing_url` that list facilities.
    pub category_paths: Vec<String>,
    /// Path segment every facility page link contains.
    pub link_marker: String,
    /// Element carrying the facility attributes.
    pub marker_element: String,
    /// `bath-name` values that only name a category, not a facility.
    pub generic_names: Vec<String>,
    /// Class of the `h1` holding the facility name.
    pub header_class: String,
    /// Boilerplate tail removed from header names.
    pub name_suffix: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    pub output: OutputConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.swm.de".to_string(),
            listing_url: "https://www.swm.de/baeder".to_string(),
            category_paths: vec![
                "hallenbaeder-muenchen".to_string(),
                "saunen-muenchen".to_string(),
                "freibaeder-muenchen".to_string(),
            ],
            link_marker: "/baeder/".to_string(),
            marker_element: "bath-capacity-item".to_string(),
            generic_names: vec!["Sauna".to_string(), "Hallenbad".to_string()],
            header_class: "headline-xl".to_string(),
            name_suffix: " – Hallenbad und Sauna".to_string(),
            timeout_secs: 10,
            output: OutputConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Load the configuration from a YAML file, or use the defaults when no
    /// path is given. The result is validated either way.
    #[instrument(level = "info")]
    pub fn load(path: Option<&str>) -> Result<Self, ScrapeError> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(Path::new(path))?;
                let config = Self::from_yaml(&text)?;
                info!(path, "Loaded configuration file");
                config
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ScrapeError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn validate(&self) -> Result<(), ScrapeError> {
        for (field, value) in [("base_url", &self.base_url), ("listing_url", &self.listing_url)] {
            Url::parse(value)
                .map_err(|e| ScrapeError::Config(format!("{field} {value:?}: {e}")))?;
        }
        if self.category_paths.is_empty() {
            return Err(ScrapeError::Config("category_paths is empty".to_string()));
        }
        if self.link_marker.is_empty() {
            return Err(ScrapeError::Config("link_marker is empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ScrapeError::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `base_url` without a trailing slash, ready to prefix `/...` paths.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// URL of one category listing page.
    pub fn category_url(&self, segment: &str) -> String {
        format!("{}/{}", self.listing_url.trim_end_matches('/'), segment)
    }

    pub fn is_generic_name(&self, name: &str) -> bool {
        self.generic_names.iter().any(|generic| generic == name)
    }
}
