pub mod csv;

pub use csv::{Csv, CsvRecordIterator};

pub struct Reader;
