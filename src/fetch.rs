//! Page fetching.
//!
//! The pipeline talks to the network through the [`PageFetcher`] trait so
//! the discovery and crawl passes can be driven by an in-memory site in
//! tests. [`HttpFetcher`] is the real implementation: one `reqwest::Client`
//! (and therefore one connection pool) per pass, a fixed per-request
//! timeout and no retries.

use crate::error::ScrapeError;
use reqwest::{Client, ClientBuilder};
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Trait for fetching the HTML body of a page.
pub trait PageFetcher {
    /// GET `url` and return the response body.
    ///
    /// Implementations report connection problems, timeouts and non-2xx
    /// statuses as transport errors (see [`ScrapeError::is_transport`]).
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// HTTP implementation of [`PageFetcher`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, ScrapeError> {
        Self::with_builder(Self::client_builder(timeout))
    }

    fn client_builder(timeout: Duration) -> ClientBuilder {
        Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
    }

    fn with_builder(builder: ClientBuilder) -> Result<Self, ScrapeError> {
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Non-success status");
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }
        let body = response.text().await?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(body)
    }
}

#[cfg(test)]
pub mod testing {
    //! In-memory site used by the pipeline tests.

    use super::PageFetcher;
    use crate::error::ScrapeError;
    use reqwest::StatusCode;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Serves fixed bodies by URL; unknown URLs answer 404.
    #[derive(Debug, Clone, Default)]
    pub struct StaticSite {
        pages: HashMap<String, String>,
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl StaticSite {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }

        /// Every URL requested so far, in order, across clones.
        pub fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl PageFetcher for StaticSite {
        async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
            self.requests.borrow_mut().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| ScrapeError::Status {
                    url: url.to_string(),
                    status: StatusCode::NOT_FOUND,
                })
        }
    }
}
