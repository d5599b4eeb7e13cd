//! Result output.
//!
//! [`write_results`] sorts the consolidated records, logs them and writes
//! the result file in the configured format:
//!
//! - [`csv`]: `id,name,type` table
//! - [`json`]: array of `{ "id", "name", "type" }` objects
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! └── scraping_results_2025-05-06.csv
//! ```

pub mod csv;
pub mod json;

use crate::config::{OutputConfig, OutputFormat};
use crate::error::ScrapeError;
use crate::models::FacilityRecord;
use crate::utils::output_file_path;
use chrono::Local;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Sort records by name, then type, both ascending.
///
/// The sort is stable, so records equal on both keys keep their order.
pub fn sort_records(records: &mut [FacilityRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.kind.cmp(&b.kind)));
}

/// Sort, log and persist the consolidated records.
///
/// # Returns
///
/// The path of the written file.
#[instrument(level = "info", skip_all, fields(dir = %output.dir, format = ?output.format))]
pub async fn write_results(
    mut records: Vec<FacilityRecord>,
    output: &OutputConfig,
) -> Result<PathBuf, ScrapeError> {
    sort_records(&mut records);

    for record in &records {
        info!(
            id = record.id,
            name = %record.name,
            kind = %record.kind,
            "Organization ID: {}, Bath Name: {}, Type: {}",
            record.id,
            record.name,
            record.kind
        );
    }
    info!(total = records.len(), "Data extracted in total: {} items", records.len());

    let path = output_file_path(output, Local::now().date_naive());
    match output.format {
        OutputFormat::Csv => csv::write_records(&records, &path).await?,
        OutputFormat::Json => json::write_records(&records, &path).await?,
    }
    Ok(path)
}
