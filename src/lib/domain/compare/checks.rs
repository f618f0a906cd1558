use crate::domain::models::{AlternateGatherRecord, GatherTable, SourmashGatherRecord};
use std::collections::HashSet;
use tracing::info;

/// Maximum allowed absolute difference between fractional columns.
/// The bound is strict: a difference of exactly this value fails.
const FRACTION_TOLERANCE: f64 = 1e-4;

/// The alternate tool reports overlap in scaled units of 1000 bp.
const OVERLAP_SCALE: f64 = 1000.0;

fn check_fraction(md5: &str, column: &str, sourmash: f64, alternate: f64) -> anyhow::Result<()> {
    if !((sourmash - alternate).abs() < FRACTION_TOLERANCE) {
        anyhow::bail!(
            "{} mismatch for md5 {}: sourmash {} vs alternate {} (tolerance {})",
            column,
            md5,
            sourmash,
            alternate,
            FRACTION_TOLERANCE
        );
    }
    Ok(())
}

fn check_row(
    md5: &str,
    sourmash: &SourmashGatherRecord,
    alternate: &AlternateGatherRecord,
) -> anyhow::Result<()> {
    if sourmash.intersect_bp != alternate.num_overlap_orig * OVERLAP_SCALE {
        anyhow::bail!(
            "intersect_bp mismatch for md5 {}: sourmash {} vs alternate {} * {}",
            md5,
            sourmash.intersect_bp,
            alternate.num_overlap_orig,
            OVERLAP_SCALE
        );
    }
    check_fraction(md5, "f_orig_query", sourmash.f_orig_query, alternate.f_orig_query)?;
    check_fraction(md5, "f_match", sourmash.f_match, alternate.f_match)?;
    check_fraction(
        md5,
        "f_unique_to_query",
        sourmash.f_unique_to_query,
        alternate.f_unique_query,
    )?;
    check_fraction(
        md5,
        "f_unique_weighted",
        sourmash.f_unique_weighted,
        alternate.f_weighted_query,
    )?;
    Ok(())
}

/// Verifies the column correspondences for every md5 present in both
/// tables, aborting on the first mismatch. Every md5 in `common` must be
/// a key of both tables.
pub fn check_common_rows(
    sourmash: &GatherTable<SourmashGatherRecord>,
    alternate: &GatherTable<AlternateGatherRecord>,
    common: &HashSet<String>,
) -> anyhow::Result<()> {
    for md5 in common {
        let sourmash_row = sourmash
            .get(md5)
            .ok_or_else(|| anyhow::anyhow!("md5 {} missing from sourmash table", md5))?;
        let alternate_row = alternate
            .get(md5)
            .ok_or_else(|| anyhow::anyhow!("md5 {} missing from alternate table", md5))?;
        check_row(md5, sourmash_row, alternate_row)?;
    }
    info!("All {} common md5s agree within tolerance", common.len());
    Ok(())
}
