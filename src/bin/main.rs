use anyhow::Context;
use gather_compare::{
    config::Config,
    domain::{
        compare::{
            SetPartition, check_common_rows, print_set_counts, print_weighted_totals,
            setup_logging, sum_f_unique_weighted, sum_f_weighted_query,
        },
        models::{AlternateGatherRecord, GatherTable, SourmashGatherRecord},
    },
    inbound::file::{Csv, Reader},
};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let config = Config::from_args(std::env::args())?;
    setup_logging(config.log_level)?;

    let sourmash_records: Vec<SourmashGatherRecord> =
        <Reader as Csv>::try_csv_to_records(&config.sourmash_path)
            .context("Failed to load sourmash gather file")?;
    info!(
        "Loaded {} rows from {}",
        sourmash_records.len(),
        config.sourmash_path.display()
    );
    let alternate_records: Vec<AlternateGatherRecord> =
        <Reader as Csv>::try_csv_to_records(&config.alternate_path)
            .context("Failed to load alternate gather file")?;
    info!(
        "Loaded {} rows from {}",
        alternate_records.len(),
        config.alternate_path.display()
    );

    let sourmash = GatherTable::from_records(sourmash_records);
    let alternate = GatherTable::from_records(alternate_records);
    if sourmash.is_empty() {
        warn!("Sourmash gather file has no rows");
    }
    if alternate.is_empty() {
        warn!("Alternate gather file has no rows");
    }

    let partition = SetPartition::new(&sourmash.md5_set(), &alternate.md5_set());
    print_set_counts(&partition);

    check_common_rows(&sourmash, &alternate, &partition.common)?;

    let total_f_unique_weighted = sum_f_unique_weighted(&sourmash, &partition.sourmash_only);
    let total_f_weighted_query = sum_f_weighted_query(&alternate, &partition.alternate_only);
    print_weighted_totals(total_f_unique_weighted, total_f_weighted_query);

    Ok(())
}
