//! File system helpers for the result file.

use crate::config::OutputConfig;
use crate::error::ScrapeError;
use chrono::NaiveDate;
use std::fs as stdfs;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument, warn};

/// Result file path for a run on `date`: `{dir}/{prefix}{YYYY-MM-DD}.{ext}`.
///
/// # Examples
///
/// ```ignore
/// // dir ".", prefix "scraping_results_", csv
/// assert_eq!(output_file_path(&output, date), PathBuf::from("./scraping_results_2025-05-06.csv"));
/// ```
pub fn output_file_path(output: &OutputConfig, date: NaiveDate) -> PathBuf {
    let file_name = format!(
        "{}{}.{}",
        output.prefix,
        date.format("%Y-%m-%d"),
        output.format.extension()
    );
    Path::new(&output.dir).join(file_name)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
/// Run before the crawl so a bad output directory fails fast.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), ScrapeError> {
    fs::create_dir_all(path).await?;
    // A small sync write has the simpler error surface
    let probe_path = Path::new(path).join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    remove_probe(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

/// Delete the write probe, logging a failure.
fn remove_probe(probe_path: &Path) -> bool {
    match stdfs::remove_file(probe_path) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %probe_path.display(), error = %e, "Failed to remove write probe");
            false
        }
    }
}

/// Fresh, not yet existing directory under the system temp dir.
#[cfg(test)]
pub fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "swm_bath_scraper_{}_{}",
        name,
        std::process::id()
    ));
    let _ = stdfs::remove_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_output_file_path_embeds_date() {
        let output = OutputConfig::default();
        let date = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap();
        assert_eq!(
            output_file_path(&output, date),
            Path::new(".").join("scraping_results_2025-05-06.csv")
        );
    }

    #[test]
    fn test_output_file_path_json() {
        let output = OutputConfig {
            dir: "/tmp/out".to_string(),
            prefix: "baths_".to_string(),
            format: OutputFormat::Json,
        };
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(
            output_file_path(&output, date),
            PathBuf::from("/tmp/out/baths_2024-12-31.json")
        );
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_directory() {
        let root = test_dir("writable");
        let dir = root.join("a").join("b");
        let path = dir.to_string_lossy().into_owned();
        ensure_writable_dir(&path).await.unwrap();
        assert!(dir.is_dir());
        assert!(!dir.join("..__probe_write__").exists());
        let _ = stdfs::remove_dir_all(&root);
    }

    #[test]
    fn test_remove_probe_reports_failure() {
        let root = test_dir("probe_missing");
        let probe = root.join("..__probe_write__");
        assert!(!remove_probe(&probe));

        stdfs::create_dir_all(&root).unwrap();
        stdfs::File::create(&probe).unwrap();
        assert!(remove_probe(&probe));
        assert!(!probe.exists());
        let _ = stdfs::remove_dir_all(&root);
    }
}
