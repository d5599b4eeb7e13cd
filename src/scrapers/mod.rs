//! Scraping of the swm.de bath pages.
//!
//! Scraping follows the same two-phase pattern for the whole site:
//!
//! 1. **Discovery** ([`listing`]): collect facility page URLs from the
//!    category listings
//! 2. **Extraction** ([`facility`]): fetch each facility page and read the
//!    facility records from its markup
//!
//! [`run`] drives a whole scrape: crawl, consolidate and write the result
//! file. [`crawl`] runs both phases one request at a time. Each phase gets its own
//! fetcher, so connections are pooled within a phase and released when it
//! ends. A page that cannot be fetched is logged and skipped.

pub mod facility;
pub mod listing;

use crate::config::ScraperConfig;
use crate::consolidate::consolidate;
use crate::error::ScrapeError;
use crate::fetch::PageFetcher;
use crate::models::FacilityRecord;
use crate::outputs;
use facility::FacilitySelectors;
use scraper::{Html, Selector};
use std::path::PathBuf;
use tracing::{error, info, instrument, warn};

/// Compile a CSS selector, keeping the parse error message.
pub(crate) fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Discover all facility pages and extract their records.
///
/// `make_fetcher` is called once per phase.
///
/// # Returns
///
/// Every extracted record in page order, duplicates included; see
/// [`crate::consolidate::consolidate`].
///
/// # Errors
///
/// Transport failures never end the crawl. Malformed ids, invalid selectors
/// and fetcher construction failures do.
#[instrument(level = "info", skip_all)]
pub async fn crawl<F, M>(config: &ScraperConfig, make_fetcher: M) -> Result<Vec<FacilityRecord>, ScrapeError>
where
    F: PageFetcher,
    M: Fn() -> Result<F, ScrapeError>,
{
    let selectors = FacilitySelectors::new(config)?;

    let targets = {
        let fetcher = make_fetcher()?;
        listing::discover(&fetcher, config).await?
    };

    let fetcher = make_fetcher()?;
    let mut records = Vec::new();
    let mut pages_with_data = 0usize;
    let mut pages_failed = 0usize;

    for target in &targets {
        info!(url = %target.url, category = %target.category, "Scraping data");

        let body = match fetcher.fetch(&target.url).await {
            Ok(body) => body,
            Err(e) if e.is_transport() => {
                error!(url = %target.url, error = %e, "Error accessing facility page; skipping");
                pages_failed += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let document = Html::parse_document(&body);
        if facility::extract_facilities(&document, &target.url, &selectors, config, &mut records)? {
            pages_with_data += 1;
        } else {
            warn!(url = %target.url, marker = %config.marker_element, "No facility data found; skipping");
        }
    }

    info!(
        pages = targets.len(),
        pages_with_data,
        pages_failed,
        records = records.len(),
        "Crawl complete"
    );
    Ok(records)
}

/// Crawl the site, consolidate the records and write the result file.
///
/// # Returns
///
/// The path of the written file, or `None` when nothing was extracted. No
/// file is written in that case.
#[instrument(level = "info", skip_all)]
pub async fn run<F, M>(config: &ScraperConfig, make_fetcher: M) -> Result<Option<PathBuf>, ScrapeError>
where
    F: PageFetcher,
    M: Fn() -> Result<F, ScrapeError>,
{
    let extracted = crawl(config, make_fetcher).await?;
    info!(records = extracted.len(), "Scraping complete");

    if extracted.is_empty() {
        info!("No data was extracted");
        return Ok(None);
    }

    let results = consolidate(extracted);
    let path = outputs::write_results(results, &config.output).await?;
    info!(path = %path.display(), "Results saved");
    Ok(Some(path))
}
