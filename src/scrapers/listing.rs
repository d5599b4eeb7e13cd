//! Facility page discovery.
//!
//! The swm.de bath section has one listing page per category (indoor pools,
//! saunas, outdoor pools). Each listing links to the individual facility
//! pages under `/baeder/...`; the same facility is often linked from more
//! than one category, so links are deduplicated across the whole pass.
//!
//! # URL Pattern
//!
//! Links are relative (`/baeder/nordbad`) and resolved against the site
//! origin to `https://www.swm.de/baeder/nordbad`. Absolute links are kept
//! as they are.

use super::parse_selector;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::fetch::PageFetcher;
use crate::models::CrawlTarget;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::{debug, error, info, instrument};

/// Visit every category listing and collect the unique facility page URLs.
///
/// A listing that cannot be fetched is logged and skipped; discovery always
/// continues with the remaining categories.
///
/// # Returns
///
/// Targets in discovery order, each URL at most once, tagged with the first
/// category it was linked from.
#[instrument(level = "info", skip_all, fields(listing = %config.listing_url))]
pub async fn discover<F: PageFetcher>(
    fetcher: &F,
    config: &ScraperConfig,
) -> Result<Vec<CrawlTarget>, ScrapeError> {
    let link_selector = parse_selector("a[href]")?;
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for segment in &config.category_paths {
        let category_url = config.category_url(segment);
        let body = match fetcher.fetch(&category_url).await {
            Ok(body) => body,
            Err(e) => {
                error!(url = %category_url, error = %e, "Error accessing category page; skipping");
                continue;
            }
        };

        let links = facility_links(&body, &link_selector, config);
        debug!(url = %category_url, count = links.len(), "Facility links on category page");

        for url in links {
            if seen.insert(url.clone()) {
                targets.push(CrawlTarget {
                    url,
                    category: segment.clone(),
                });
            }
        }
    }

    info!(count = targets.len(), "Found unique bath pages to scrape");
    Ok(targets)
}

/// Extract the facility links of one listing page, absolutized, in document order.
fn facility_links(body: &str, link_selector: &Selector, config: &ScraperConfig) -> Vec<String> {
    let document = Html::parse_document(body);
    document
        .select(link_selector)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.contains(config.link_marker.as_str()) && *href != config.link_marker)
        .map(|href| absolutize(href, config.origin()))
        .collect()
}

/// Prefix root-relative links with the site origin; leave everything else alone.
fn absolutize(href: &str, origin: &str) -> String {
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        href.to_string()
    }
}
