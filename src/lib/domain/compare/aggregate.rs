use crate::domain::models::{AlternateGatherRecord, GatherRow, GatherTable, SourmashGatherRecord};
use std::collections::HashSet;

/// Sum of `f_unique_weighted` over the sourmash rows whose md5 is in the
/// given set. Summation order is unspecified.
pub fn sum_f_unique_weighted(
    table: &GatherTable<SourmashGatherRecord>,
    md5s: &HashSet<String>,
) -> f64 {
    table
        .rows()
        .filter(|row| md5s.contains(row.md5()))
        .map(|row| row.f_unique_weighted)
        .sum()
}

/// Sum of `f_weighted_query` over the alternate rows whose md5 is in the
/// given set.
pub fn sum_f_weighted_query(
    table: &GatherTable<AlternateGatherRecord>,
    md5s: &HashSet<String>,
) -> f64 {
    table
        .rows()
        .filter(|row| md5s.contains(row.md5()))
        .map(|row| row.f_weighted_query)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compare::reconcile::SetPartition;

    fn sourmash_record(md5: &str, f_unique_weighted: f64) -> SourmashGatherRecord {
        SourmashGatherRecord {
            md5: md5.to_string(),
            intersect_bp: 1000.0,
            f_orig_query: 0.1,
            f_match: 0.1,
            f_unique_to_query: 0.1,
            f_unique_weighted,
        }
    }

    fn alternate_record(md5: &str, f_weighted_query: f64) -> AlternateGatherRecord {
        AlternateGatherRecord {
            md5: md5.to_string(),
            num_overlap_orig: 1.0,
            f_orig_query: 0.1,
            f_match: 0.1,
            f_unique_query: 0.1,
            f_weighted_query,
        }
    }

    #[test]
    fn one_sided_sums_cover_only_their_difference_set() {
        // sourmash has {x, y}, alternate has {y, z}
        let sourmash = GatherTable::from_records(vec![
            sourmash_record("x", 0.25),
            sourmash_record("y", 0.5),
        ]);
        let alternate = GatherTable::from_records(vec![
            alternate_record("y", 0.5),
            alternate_record("z", 0.125),
        ]);
        let partition = SetPartition::new(&sourmash.md5_set(), &alternate.md5_set());
        assert_eq!(sum_f_unique_weighted(&sourmash, &partition.sourmash_only), 0.25);
        assert_eq!(sum_f_weighted_query(&alternate, &partition.alternate_only), 0.125);
    }

    #[test]
    fn identical_tables_sum_to_zero_on_both_sides() {
        let sourmash = GatherTable::from_records(vec![sourmash_record("x", 0.25)]);
        let alternate = GatherTable::from_records(vec![alternate_record("x", 0.25)]);
        let partition = SetPartition::new(&sourmash.md5_set(), &alternate.md5_set());
        assert_eq!(sum_f_unique_weighted(&sourmash, &partition.sourmash_only), 0.0);
        assert_eq!(sum_f_weighted_query(&alternate, &partition.alternate_only), 0.0);
    }

    #[test]
    fn disjoint_tables_sum_over_every_row() {
        let sourmash = GatherTable::from_records(vec![
            sourmash_record("a", 0.25),
            sourmash_record("b", 0.5),
        ]);
        let alternate = GatherTable::from_records(vec![alternate_record("c", 0.125)]);
        let partition = SetPartition::new(&sourmash.md5_set(), &alternate.md5_set());
        assert!(partition.common.is_empty());
        assert_eq!(sum_f_unique_weighted(&sourmash, &partition.sourmash_only), 0.75);
        assert_eq!(sum_f_weighted_query(&alternate, &partition.alternate_only), 0.125);
    }
}
