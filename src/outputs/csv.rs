//! CSV output.
//!
//! Writes a header row `id,name,type` followed by one row per record, each
//! terminated by CRLF as in RFC 4180. Fields
//! containing the separator, quotes or line breaks are quoted, with embedded
//! quotes doubled.

use crate::error::ScrapeError;
use crate::models::FacilityRecord;
use std::io::{self, Write};
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

const SEP: char = ',';
const EOL: &str = "\r\n";
const HEADER: [&str; 3] = ["id", "name", "type"];

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{SEP}")?;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    write!(w, "{EOL}")
}

/// Render the records, header first.
pub fn to_csv_string(records: &[FacilityRecord]) -> io::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_row(&mut buf, &HEADER)?;
    for record in records {
        let id = record.id.to_string();
        write_row(&mut buf, &[id.as_str(), record.name.as_str(), record.kind.as_str()])?;
    }
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write the records to `path`, creating the parent directory if needed.
#[instrument(level = "info", skip(records), fields(count = records.len()))]
pub async fn write_records(records: &[FacilityRecord], path: &Path) -> Result<(), ScrapeError> {
    let contents = to_csv_string(records)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, contents).await?;
    info!(path = %path.display(), "Wrote CSV file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rows() {
        let csv = to_csv_string(&[
            FacilityRecord::new(30195, "Nordbad", "hallenbad"),
            FacilityRecord::new(30208, "Westbad", "sauna"),
        ])
        .unwrap();
        assert_eq!(
            csv,
            "id,name,type\r\n30195,Nordbad,hallenbad\r\n30208,Westbad,sauna\r\n"
        );
    }

    #[test]
    fn test_quoting() {
        let csv = to_csv_string(&[FacilityRecord::new(1, "Bad, \"Nord\"", "hallenbad")]).unwrap();
        assert_eq!(csv, "id,name,type\r\n1,\"Bad, \"\"Nord\"\"\",hallenbad\r\n");
    }

    #[test]
    fn test_rows_end_with_crlf() {
        let csv = to_csv_string(&[FacilityRecord::new(1, "Nordbad", "hallenbad")]).unwrap();
        assert_eq!(csv.matches("\r\n").count(), 2);
        assert_eq!(csv.matches('\n').count(), 2);
    }

    #[test]
    fn test_empty_list_is_header_only() {
        assert_eq!(to_csv_string(&[]).unwrap(), "id,name,type\r\n");
    }

    #[test]
    fn test_non_ascii_untouched() {
        let csv = to_csv_string(&[FacilityRecord::new(2, "Müller'sches Volksbad", "sauna")]).unwrap();
        assert!(csv.ends_with("2,Müller'sches Volksbad,sauna\r\n"));
    }
}
