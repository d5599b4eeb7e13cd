//! Duplicate consolidation.
//!
//! The same facility shows up more than once when it is linked from several
//! category pages or carries several markers. Copies found on a page without
//! a usable headline are named [`UNKNOWN_NAME`]; consolidation makes sure
//! such a placeholder never wins over a real name.

use crate::models::FacilityRecord;
use tracing::{debug, instrument};

/// Reduce `records` to one record per id.
///
/// Records are scanned in extraction order. For each record the next later
/// record with the same id is located: if that one is named
/// [`UNKNOWN_NAME`] it is replaced by the earlier record, otherwise it is
/// kept as is. Either way the earlier record is dropped, so the survivor of
/// a group sits at the position of its last occurrence.
///
/// Quadratic, which is fine for the few dozen facilities on the site.
///
/// [`UNKNOWN_NAME`]: crate::models::UNKNOWN_NAME
#[instrument(level = "info", skip_all, fields(input = records.len()))]
pub fn consolidate(mut records: Vec<FacilityRecord>) -> Vec<FacilityRecord> {
    let mut consolidated = Vec::with_capacity(records.len());

    for i in 0..records.len() {
        let duplicate = (i + 1..records.len()).find(|&j| records[j].id == records[i].id);
        match duplicate {
            Some(j) => {
                if records[j].has_unknown_name() {
                    debug!(id = records[i].id, name = %records[i].name, "Replacing placeholder duplicate");
                    records[j] = records[i].clone();
                }
            }
            None => consolidated.push(records[i].clone()),
        }
    }

    debug!(output = consolidated.len(), "Consolidated records");
    consolidated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN_NAME;
    use std::collections::HashSet;

    fn rec(id: u64, name: &str) -> FacilityRecord {
        FacilityRecord::new(id, name, "hallenbad")
    }

    #[test]
    fn test_known_name_beats_later_unknown() {
        let out = consolidate(vec![rec(1, "Nordbad"), rec(1, UNKNOWN_NAME)]);
        assert_eq!(out, vec![rec(1, "Nordbad")]);
    }

    #[test]
    fn test_known_name_beats_earlier_unknown() {
        let out = consolidate(vec![rec(1, UNKNOWN_NAME), rec(1, "Nordbad")]);
        assert_eq!(out, vec![rec(1, "Nordbad")]);
    }

    #[test]
    fn test_known_name_survives_chain_of_unknowns() {
        let out = consolidate(vec![
            rec(1, "Nordbad"),
            rec(2, "Südbad"),
            rec(1, UNKNOWN_NAME),
            rec(1, UNKNOWN_NAME),
        ]);
        assert_eq!(out, vec![rec(2, "Südbad"), rec(1, "Nordbad")]);
    }

    #[test]
    fn test_later_known_name_wins_over_earlier_known_name() {
        let out = consolidate(vec![rec(1, "Nordbad"), rec(1, "Nordbad Sauna")]);
        assert_eq!(out, vec![rec(1, "Nordbad Sauna")]);
    }

    #[test]
    fn test_lone_unknown_is_kept() {
        let out = consolidate(vec![rec(1, UNKNOWN_NAME), rec(2, "Westbad")]);
        assert_eq!(out, vec![rec(1, UNKNOWN_NAME), rec(2, "Westbad")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(consolidate(Vec::new()).is_empty());
    }

    #[test]
    fn test_ids_unique_and_never_longer() {
        let input = vec![
            rec(3, UNKNOWN_NAME),
            rec(1, "Nordbad"),
            rec(3, "Dantebad"),
            rec(2, UNKNOWN_NAME),
            rec(1, UNKNOWN_NAME),
            rec(2, UNKNOWN_NAME),
            rec(3, UNKNOWN_NAME),
        ];
        let out = consolidate(input.clone());

        let ids: HashSet<u64> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), out.len());
        assert!(out.len() <= input.len());
        assert_eq!(out.len(), 3);

        let name_of = |id: u64| out.iter().find(|r| r.id == id).map(|r| r.name.as_str());
        assert_eq!(name_of(1), Some("Nordbad"));
        assert_eq!(name_of(2), Some(UNKNOWN_NAME));
        assert_eq!(name_of(3), Some("Dantebad"));
    }

    #[test]
    fn test_idempotent() {
        let once = consolidate(vec![
            rec(1, UNKNOWN_NAME),
            rec(2, "Südbad"),
            rec(1, "Nordbad"),
            rec(4, "Michaelibad"),
            rec(2, UNKNOWN_NAME),
        ]);
        let twice = consolidate(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_type_travels_with_winning_record() {
        let out = consolidate(vec![
            FacilityRecord::new(5, "Cosimawellenbad", "sauna"),
            FacilityRecord::new(5, UNKNOWN_NAME, "hallenbad"),
        ]);
        assert_eq!(out, vec![FacilityRecord::new(5, "Cosimawellenbad", "sauna")]);
    }
}
