//! Row source: turns delimited text into [`Row`]s
//!
//! The first row yielded is always the header. Header handling is left to the
//! pipeline driver, so the csv reader itself runs without a header.

mod row;

pub use row::Row;

use crate::error::{ErrorCode, FlightError, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options controlling how raw text is split into fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceOptions {
    pub delimiter: u8,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Lazy iterator over the records of a delimited text input
pub struct CsvRowSource<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    fallback_line: usize,
}

impl CsvRowSource<File> {
    /// Open a dataset file
    pub fn open(path: impl AsRef<Path>, options: &SourceOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            FlightError::source_with_code(
                ErrorCode::SOURCE_IO_ERROR,
                e.to_string(),
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;
        debug!("Opened dataset {}", path.display());
        Ok(Self::from_reader(file, options))
    }
}

impl<R: Read> CsvRowSource<R> {
    pub fn from_reader(reader: R, options: &SourceOptions) -> Self {
        let records = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .delimiter(options.delimiter)
            .from_reader(reader)
            .into_records();

        Self {
            records,
            fallback_line: 0,
        }
    }
}

impl<R: Read> Iterator for CsvRowSource<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        self.fallback_line += 1;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(self.fallback_line);

        let fields = record.iter().map(normalize_field).collect();
        Some(Ok(Row::new(line, fields)))
    }
}

/// Normalize a parsed field
///
/// Stray quotes are dropped and an embedded `", "` becomes `": "`, so that
/// `"Ames, IA"` reads as `Ames: IA`.
pub fn normalize_field(field: &str) -> String {
    field.replace('"', "").replace(", ", ": ")
}

/// Build in-memory rows from string slices, numbering lines from 1
pub fn rows_from(records: &[&[&str]]) -> Vec<Result<Row>> {
    records
        .iter()
        .enumerate()
        .map(|(i, fields)| Ok(Row::new(i + 1, fields.iter().map(|f| f.to_string()).collect())))
        .collect()
}

/// A dataset on disk that can hand out fresh row sources
///
/// Each pipeline run consumes its source, so every run asks for a new one.
#[derive(Debug, Clone)]
pub struct Dataset {
    path: PathBuf,
    options: SourceOptions,
}

impl Dataset {
    pub fn new(path: impl Into<PathBuf>, options: SourceOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> Result<CsvRowSource<File>> {
        CsvRowSource::open(&self.path, &self.options)
    }
}
