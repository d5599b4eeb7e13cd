//! # SWM Bath Scraper
//!
//! Collects the swimming pools and saunas operated by Stadtwerke München
//! from the public website and writes one record per facility (id, name,
//! type) to a dated CSV or JSON file.
//!
//! ## Usage
//!
//! ```sh
//! swm_bath_scraper -o ./out -f csv
//! ```
//!
//! ## Architecture
//!
//! The application runs a sequential pipeline:
//! 1. **Discovery**: collect facility page URLs from the category listings
//! 2. **Extraction**: fetch each facility page and read its capacity markers
//! 3. **Consolidation**: keep one record per facility id
//! 4. **Output**: sort, log and write the result file
//!
//! If nothing was extracted no file is written.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod consolidate;
mod error;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use config::ScraperConfig;
use fetch::HttpFetcher;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("Start scraping SWM websites");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut config = ScraperConfig::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;
    debug!(?config, "Effective configuration");

    // Fail before the crawl rather than after it
    if let Err(e) = ensure_writable_dir(&config.output.dir).await {
        error!(
            path = %config.output.dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    let timeout = config.timeout();
    scrapers::run(&config, || HttpFetcher::new(timeout)).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
