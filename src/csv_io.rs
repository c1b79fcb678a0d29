//! Delimited-file boundary: reads raw exports into [`Table`]s and writes
//! tables or serializable records back out as CSV.

use crate::config::InputConfig;
use crate::error::{InspectionError, Result};
use crate::metrics;
use crate::table::Table;
use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Reader for headered delimited text with lenient row handling
#[derive(Debug, Clone)]
pub struct TableReader {
    delimiter: u8,
    null_tokens: Vec<String>,
}

impl Default for TableReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_tokens: InputConfig::default().null_tokens,
        }
    }
}

impl TableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(input: &InputConfig) -> Result<Self> {
        Ok(Self {
            delimiter: input.delimiter_byte()?,
            null_tokens: input.null_tokens.clone(),
        })
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_null_tokens(mut self, tokens: Vec<String>) -> Self {
        self.null_tokens = tokens;
        self
    }

    /// Read a file. A missing file is fatal and reported with its path.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn read_path(&self, path: &Path) -> Result<Table> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InspectionError::MissingInputFile {
                path: path.to_path_buf(),
            },
            _ => InspectionError::Io(e),
        })?;
        let table = self.read(file)?;
        info!("Read {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    /// Read headered records. Rows with more fields than the header, or that
    /// fail to decode, are skipped; short rows are padded with missing cells.
    pub fn read<R: Read>(&self, source: R) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        let mut table = Table::new(headers.iter());
        let width = table.headers().len();
        let mut skipped = 0usize;

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    debug!("Skipping undecodable line: {}", e);
                    skipped += 1;
                    continue;
                }
            };
            if record.len() > width {
                debug!(
                    "Skipping line {}: expected {} fields, saw {}",
                    record.position().map(|p| p.line()).unwrap_or_default(),
                    width,
                    record.len()
                );
                skipped += 1;
                continue;
            }
            let values = record.iter().map(|cell| self.clean_cell(cell)).collect();
            table.push_row(values);
        }

        if skipped > 0 {
            warn!("Skipped {} malformed lines", skipped);
        }
        metrics::io::rows_read(table.len());
        metrics::io::rows_skipped(skipped);
        Ok(table)
    }

    fn clean_cell(&self, cell: &str) -> String {
        let trimmed = cell.trim();
        if self.null_tokens.iter().any(|t| t == trimmed) {
            String::new()
        } else {
            cell.to_string()
        }
    }
}

/// Write a table as comma-separated text with a header row
pub fn write_table<W: Write>(sink: W, table: &Table) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(sink);
    writer.write_record(table.headers())?;
    for row in table.raw_rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_table_path(path: &Path, table: &Table) -> Result<()> {
    let file = create_output(path)?;
    write_table(file, table)?;
    info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Serialize records as CSV under an explicit header row, so an empty
/// record set still produces a well-formed file
pub fn write_records<W, T>(sink: W, headers: &[&str], records: &[T]) -> Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    writer.write_record(headers)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_records_path<T: Serialize>(path: &Path, headers: &[&str], records: &[T]) -> Result<()> {
    let file = create_output(path)?;
    write_records(file, headers, records)?;
    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

fn create_output(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}
