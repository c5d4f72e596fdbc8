//! CSV record source
//!
//! Reads the export header once, checks the configured columns are present,
//! then yields one [`RawRecord`] per data row.

use crate::config::InputConfig;
use crate::core::record::RawRecord;
use crate::utils::error::{Result, UploaderError};
use std::fs::File;
use std::io::Read;
use tracing::{debug, info};

/// Iterator over the data rows of a CSV export
pub struct CsvSource<R: Read> {
    header: Vec<String>,
    records: csv::StringRecordsIntoIter<R>,
}

impl CsvSource<File> {
    /// Open the file named by `config.path`
    pub fn open(config: &InputConfig) -> Result<Self> {
        info!("Reading records from: {:?}", config.path);
        let file = File::open(&config.path)?;
        Self::from_reader(file, config)
    }
}

impl<R: Read> CsvSource<R> {
    /// Build a source over any reader using the configured dialect
    pub fn from_reader(reader: R, config: &InputConfig) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(ascii_byte(config.delimiter, "delimiter")?)
            .quote(ascii_byte(config.quote, "quote")?)
            .from_reader(reader);

        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        debug!("CSV header: {:?}", header);

        for column in config.columns.required() {
            if !header.iter().any(|h| h == column) {
                return Err(UploaderError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        Ok(Self {
            header,
            records: reader.into_records(),
        })
    }

    /// Column names from the header row
    pub fn header(&self) -> &[String] {
        &self.header
    }
}

impl<R: Read> Iterator for CsvSource<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.records.next()?;
        Some(
            row.map(|row| {
                let values: Vec<&str> = row.iter().collect();
                RawRecord::from_row(&self.header, &values)
            })
            .map_err(UploaderError::from),
        )
    }
}

fn ascii_byte(c: char, what: &str) -> Result<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| UploaderError::Config(format!("CSV {} must be ASCII, got {:?}", what, c)))
}
