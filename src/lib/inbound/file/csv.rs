use crate::inbound::file::Reader;
use anyhow::Context;
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::path::Path;

pub trait Csv {
    fn try_csv_to_records<R: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<R>>;
    fn csv_record_iter<R: DeserializeOwned>(path: &Path) -> anyhow::Result<CsvRecordIterator<R>>;
}

pub struct CsvRecordIterator<R> {
    rdr: csv::DeserializeRecordsIntoIter<std::fs::File, R>,
    file_name: String,
    row_num: usize,
}

impl<R: DeserializeOwned> Iterator for CsvRecordIterator<R> {
    type Item = anyhow::Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.rdr.next() {
            Some(Ok(record)) => {
                self.row_num += 1;
                Some(Ok(record))
            }
            Some(Err(e)) => Some(Err(anyhow::anyhow!(
                "failed to deserialize row {} in csv file: {}: {}",
                self.row_num + 1,
                self.file_name,
                e
            ))),
            None => None,
        }
    }
}

impl Csv for Reader {
    fn try_csv_to_records<R: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<R>> {
        let iter = Self::csv_record_iter(path)?;
        let mut output = Vec::new();
        for result in iter {
            output.push(result?);
        }
        Ok(output)
    }

    fn csv_record_iter<R: DeserializeOwned>(path: &Path) -> anyhow::Result<CsvRecordIterator<R>> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown file")
            .to_string();
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open csv file: {}", file_name))?;
        let rdr = ReaderBuilder::new().has_headers(true).from_reader(file);
        Ok(CsvRecordIterator {
            rdr: rdr.into_deserialize(),
            file_name,
            row_num: 0,
        })
    }
}
