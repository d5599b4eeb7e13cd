//! Data models for scraped bath facilities.
//!
//! - [`FacilityRecord`]: one pool or sauna as found on a facility page
//! - [`CrawlTarget`]: a facility page discovered on a category listing

use serde::{Deserialize, Serialize};

/// Name given to a facility whose page header could not be found.
///
/// Consolidation treats this value as a placeholder that any real name
/// replaces.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A bookable facility (pool or sauna) read from a `bath-capacity-item` marker.
///
/// The `type` field is named `kind` in Rust and serialized as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FacilityRecord {
    /// The `organization-unit-id` of the marker.
    pub id: u64,
    /// Display name, either the marker's `bath-name` or the page header.
    pub name: String,
    /// The marker's `icon-name`, e.g. `hallenbad` or `sauna`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl FacilityRecord {
    pub fn new(id: u64, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// True when the name is the [`UNKNOWN_NAME`] placeholder.
    pub fn has_unknown_name(&self) -> bool {
        self.name == UNKNOWN_NAME
    }
}

/// A facility page to scrape, together with the category it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    pub url: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_type_field() {
        let record = FacilityRecord::new(42, "Nordbad", "hallenbad");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":42,"name":"Nordbad","type":"hallenbad"}"#);
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{"id": 7, "name": "Dantebad", "type": "sauna"}"#;
        let record: FacilityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, FacilityRecord::new(7, "Dantebad", "sauna"));
    }

    #[test]
    fn test_has_unknown_name() {
        assert!(FacilityRecord::new(1, UNKNOWN_NAME, "sauna").has_unknown_name());
        assert!(!FacilityRecord::new(1, "Müller'sches Volksbad", "sauna").has_unknown_name());
    }
}
