pub mod gather;

pub use gather::{AlternateGatherRecord, GatherRow, GatherTable, SourmashGatherRecord};
