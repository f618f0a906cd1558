use std::collections::HashSet;

/// Partition of two md5 key sets into intersection and one-sided
/// differences, with the source cardinalities kept for reporting.
#[derive(Debug)]
pub struct SetPartition {
    pub sourmash_total: usize,
    pub alternate_total: usize,
    pub common: HashSet<String>,
    pub sourmash_only: HashSet<String>,
    pub alternate_only: HashSet<String>,
}

impl SetPartition {
    pub fn new(sourmash_md5s: &HashSet<String>, alternate_md5s: &HashSet<String>) -> Self {
        Self {
            sourmash_total: sourmash_md5s.len(),
            alternate_total: alternate_md5s.len(),
            common: sourmash_md5s.intersection(alternate_md5s).cloned().collect(),
            sourmash_only: sourmash_md5s.difference(alternate_md5s).cloned().collect(),
            alternate_only: alternate_md5s.difference(sourmash_md5s).cloned().collect(),
        }
    }
}
