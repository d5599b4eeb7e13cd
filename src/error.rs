//! Error type shared by the scraping pipeline.
//!
//! Only two kinds of failure matter to the crawl loop: transport failures,
//! which skip a single page, and everything else, which ends the run.
//! [`ScrapeError::is_transport`] draws that line.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Connection failure, timeout or body read error.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// A marker carried an `organization-unit-id` that is not a positive integer.
    #[error("invalid organization-unit-id {value:?} on {url}")]
    InvalidId { url: String, value: String },

    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ScrapeError {
    /// Whether the error only concerns the page being fetched.
    pub fn is_transport(&self) -> bool {
        matches!(self, ScrapeError::Http(_) | ScrapeError::Status { .. })
    }
}
