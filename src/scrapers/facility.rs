//! Facility page extraction.
//!
//! Every facility page embeds one `bath-capacity-item` element per bookable
//! amenity, e.g.
//!
//! ```html
//! <bath-capacity-item organization-unit-id="30195" icon-name="hallenbad"
//!                     bath-name="Hallenbad"></bath-capacity-item>
//! ```
//!
//! When `bath-name` only repeats the category ("Sauna", "Hallenbad") the
//! facility name is taken from the page headline instead.

use super::parse_selector;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::models::{FacilityRecord, UNKNOWN_NAME};
use scraper::{Html, Selector};
use tracing::{debug, instrument};

const ID_ATTR: &str = "organization-unit-id";
const TYPE_ATTR: &str = "icon-name";
const NAME_ATTR: &str = "bath-name";

/// Selectors compiled once per crawl from the configuration.
#[derive(Debug)]
pub struct FacilitySelectors {
    marker: Selector,
    header: Selector,
}

impl FacilitySelectors {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let header = if config.header_class.is_empty() {
            "h1".to_string()
        } else {
            format!("h1.{}", config.header_class)
        };
        Ok(Self {
            marker: parse_selector(&config.marker_element)?,
            header: parse_selector(&header)?,
        })
    }
}

/// Append one record per complete marker on the page to `out`.
///
/// Markers lacking an id or a type are skipped.
///
/// # Returns
///
/// `Ok(true)` if at least one record was appended, `Ok(false)` if the page
/// had no usable marker.
///
/// # Errors
///
/// [`ScrapeError::InvalidId`] when an id is not a positive integer. Ids drive
/// consolidation, so a malformed one aborts the run instead of being skipped.
#[instrument(level = "debug", skip(document, selectors, config, out))]
pub fn extract_facilities(
    document: &Html,
    url: &str,
    selectors: &FacilitySelectors,
    config: &ScraperConfig,
    out: &mut Vec<FacilityRecord>,
) -> Result<bool, ScrapeError> {
    let mut extracted = false;

    for marker in document.select(&selectors.marker) {
        let element = marker.value();
        let (Some(raw_id), Some(kind)) = (non_empty_attr(element, ID_ATTR), non_empty_attr(element, TYPE_ATTR))
        else {
            debug!("Skipping incomplete marker");
            continue;
        };

        let id = parse_id(raw_id).ok_or_else(|| ScrapeError::InvalidId {
            url: url.to_string(),
            value: raw_id.to_string(),
        })?;

        let name = match non_empty_attr(element, NAME_ATTR) {
            Some(name) if !config.is_generic_name(name) => name.to_string(),
            _ => header_name(document, selectors, config),
        };

        debug!(id, %name, kind, "Extracted facility");
        out.push(FacilityRecord::new(id, name, kind));
        extracted = true;
    }

    Ok(extracted)
}

/// Facility name from the page headline, or [`UNKNOWN_NAME`] if there is none.
///
/// The configured boilerplate suffix is removed.
pub fn header_name(document: &Html, selectors: &FacilitySelectors, config: &ScraperConfig) -> String {
    document
        .select(&selectors.header)
        .next()
        .map(|h1| h1.text().collect::<String>())
        .map(|text| {
            let text = text.trim();
            text.strip_suffix(config.name_suffix.as_str())
                .unwrap_or(text)
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

fn non_empty_attr<'a>(element: &'a scraper::node::Element, name: &str) -> Option<&'a str> {
    element.attr(name).filter(|value| !value.trim().is_empty())
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|id| *id > 0)
}
