//! JSON output.
//!
//! The result file is a pretty-printed array of records:
//!
//! ```json
//! [
//!   { "id": 30195, "name": "Nordbad", "type": "hallenbad" }
//! ]
//! ```

use crate::error::ScrapeError;
use crate::models::FacilityRecord;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write the records to `path` as a JSON array.
///
/// Creates the parent directory if it does not exist yet.
#[instrument(level = "info", skip(records), fields(count = records.len()))]
pub async fn write_records(records: &[FacilityRecord], path: &Path) -> Result<(), ScrapeError> {
    let json = serde_json::to_string_pretty(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!(path = %path.display(), "Wrote JSON file");
    Ok(())
}
