pub mod aggregate;
pub mod checks;
pub mod reconcile;
pub mod setup;
pub mod summary;

pub use aggregate::{sum_f_unique_weighted, sum_f_weighted_query};
pub use checks::check_common_rows;
pub use reconcile::SetPartition;
pub use setup::setup_logging;
pub use summary::{print_set_counts, print_weighted_totals};
