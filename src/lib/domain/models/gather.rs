use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// One row of a sourmash gather CSV. Only the columns the comparison
/// consumes are deserialized; everything else in the file is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SourmashGatherRecord {
    pub md5: String,
    pub intersect_bp: f64,
    pub f_orig_query: f64,
    pub f_match: f64,
    pub f_unique_to_query: f64,
    pub f_unique_weighted: f64,
}

/// One row of an alternate-tool gather CSV. The overlap column counts
/// scaled units, so `num_overlap_orig * 1000` corresponds to sourmash's
/// `intersect_bp`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlternateGatherRecord {
    pub md5: String,
    pub num_overlap_orig: f64,
    pub f_orig_query: f64,
    pub f_match: f64,
    pub f_unique_query: f64,
    pub f_weighted_query: f64,
}

pub trait GatherRow {
    fn md5(&self) -> &str;
}

impl GatherRow for SourmashGatherRecord {
    fn md5(&self) -> &str {
        &self.md5
    }
}

impl GatherRow for AlternateGatherRecord {
    fn md5(&self) -> &str {
        &self.md5
    }
}

/// Gather rows indexed by md5. Duplicate md5s collapse to the last
/// occurrence. Read-only after construction.
#[derive(Debug)]
pub struct GatherTable<R> {
    rows: HashMap<String, R>,
}

impl<R: GatherRow> GatherTable<R> {
    pub fn from_records(records: Vec<R>) -> Self {
        let mut rows = HashMap::with_capacity(records.len());
        for record in records {
            rows.insert(record.md5().to_string(), record);
        }
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, md5: &str) -> Option<&R> {
        self.rows.get(md5)
    }

    pub fn rows(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    pub fn md5_set(&self) -> HashSet<String> {
        self.rows.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(md5: &str, f_unique_weighted: f64) -> SourmashGatherRecord {
        SourmashGatherRecord {
            md5: md5.to_string(),
            intersect_bp: 1000.0,
            f_orig_query: 0.1,
            f_match: 0.1,
            f_unique_to_query: 0.1,
            f_unique_weighted,
        }
    }

    #[test]
    fn duplicate_md5_last_wins() {
        let table = GatherTable::from_records(vec![record("abc", 0.1), record("abc", 0.9)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("abc").unwrap().f_unique_weighted, 0.9);
    }

    #[test]
    fn empty_record_list_builds_an_empty_table() {
        let table = GatherTable::<SourmashGatherRecord>::from_records(Vec::new());
        assert!(table.is_empty());
        assert!(!GatherTable::from_records(vec![record("abc", 0.1)]).is_empty());
    }

    #[test]
    fn md5_set_covers_all_rows() {
        let table = GatherTable::from_records(vec![record("abc", 0.1), record("def", 0.2)]);
        let md5s = table.md5_set();
        assert_eq!(md5s.len(), 2);
        assert!(md5s.contains("abc") && md5s.contains("def"));
    }
}
