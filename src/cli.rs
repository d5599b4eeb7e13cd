//! Command-line interface definitions.
//!
//! Options override the matching fields of the configuration file. Every
//! option can also be set through an environment variable.

use crate::config::{OutputFormat, ScraperConfig};
use clap::Parser;

/// Command-line arguments for the SWM bath scraper.
///
/// # Examples
///
/// ```sh
/// # Defaults: CSV in the current directory
/// swm_bath_scraper
///
/// # JSON into ./out with a custom config
/// swm_bath_scraper -c scraper.yaml -o ./out -f json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML configuration file
    #[arg(short, long, env = "SWM_SCRAPER_CONFIG")]
    pub config: Option<String>,

    /// Output directory for the result file
    #[arg(short, long, env = "SWM_SCRAPER_OUTPUT_DIR")]
    pub output_dir: Option<String>,

    /// File name prefix; the run date and extension are appended
    #[arg(long, env = "SWM_SCRAPER_OUTPUT_PREFIX")]
    pub output_prefix: Option<String>,

    /// Result file format
    #[arg(short, long, value_enum, env = "SWM_SCRAPER_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Per-request timeout in seconds
    #[arg(long, env = "SWM_SCRAPER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Apply the options that were given on top of `config`.
    pub fn apply(&self, config: &mut ScraperConfig) {
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
        if let Some(prefix) = &self.output_prefix {
            config.output.prefix = prefix.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
    }
}
