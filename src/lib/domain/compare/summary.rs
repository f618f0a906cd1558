use crate::domain::compare::reconcile::SetPartition;

/// The five set-cardinality lines of the report. Printed before the
/// per-row checks run, so they survive a mid-comparison failure.
pub fn print_set_counts(partition: &SetPartition) {
    println!(
        "Number of md5s in sourmash gather: {}",
        partition.sourmash_total
    );
    println!(
        "Number of md5s in alternate gather: {}",
        partition.alternate_total
    );
    println!(
        "Number of md5s in sourmash gather but not in alternate gather: {}",
        partition.sourmash_only.len()
    );
    println!(
        "Number of md5s in alternate gather but not in sourmash gather: {}",
        partition.alternate_only.len()
    );
    println!(
        "Number of md5s in both sourmash gather and alternate gather: {}",
        partition.common.len()
    );
}

/// The two weighted-total lines of the report.
pub fn print_weighted_totals(total_f_unique_weighted: f64, total_f_weighted_query: f64) {
    println!(
        "Total f_unique_weighted for md5s in sourmash gather but not in alternate gather: {}",
        total_f_unique_weighted
    );
    println!(
        "Total f_weighted_query for md5s in alternate gather but not in sourmash gather: {}",
        total_f_weighted_query
    );
}
