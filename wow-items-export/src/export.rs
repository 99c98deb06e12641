//! Writing records to CSV and reading them back.

use std::path::{Path, PathBuf};

use wow_items_core::{Item, ItemSource};

use crate::column::{Column, ColumnSpec};
use crate::error::ExportError;
use crate::record::{Record, map_items};

/// Output file used when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "out.csv";

/// Everything a single export needs: where to write and which columns.
///
/// Slugs are computed exactly when `columns` holds [`Column::NameSlug`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub output_path: PathBuf,
    pub columns: ColumnSpec,
}

impl ExportConfig {
    /// Config with the standard column layout for `include_slug`.
    pub fn new(output_path: impl Into<PathBuf>, include_slug: bool) -> Self {
        Self {
            output_path: output_path.into(),
            columns: ColumnSpec::standard(include_slug),
        }
    }

    pub fn with_columns(mut self, columns: ColumnSpec) -> Self {
        self.columns = columns;
        self
    }

    pub fn include_slug(&self) -> bool {
        self.columns.contains(Column::NameSlug)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH, false)
    }
}

/// Map `items` to records and write them to `config.output_path`.
///
/// Any existing file is overwritten. An empty `items` slice still produces a
/// file holding the header row.
pub fn export(items: &[Item], config: &ExportConfig) -> Result<(), ExportError> {
    let records = map_items(items, config.include_slug());
    write_records(&records, config)
}

/// Enumerate `source` and export everything it yields.
///
/// Returns the number of items written.
pub fn export_from_source<S>(source: &S, config: &ExportConfig) -> Result<usize, ExportError>
where
    S: ItemSource + ?Sized,
{
    let items = source.items()?;
    log::debug!("Read {} items from {}", items.len(), source.name());
    export(&items, config)?;
    Ok(items.len())
}

/// Write the header followed by one row per record, in order.
///
/// A header with a repeated title is refused before the file is touched,
/// since it couldn't be read back unambiguously.
pub fn write_records(records: &[Record], config: &ExportConfig) -> Result<(), ExportError> {
    let path = config.output_path.as_path();
    if let Some(title) = config.columns.duplicate_title() {
        return Err(ExportError::DuplicateTitle(title.to_string()));
    }
    let mut writer = csv::Writer::from_path(path).map_err(|e| write_error(path, e))?;

    writer
        .write_record(config.columns.titles())
        .map_err(|e| write_error(path, e))?;

    for record in records {
        writer
            .write_record(record.row(&config.columns))
            .map_err(|e| write_error(path, e))?;
    }

    writer.flush().map_err(|e| write_error(path, e.into()))?;

    log::debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Parse a CSV produced by [`write_records`] back into records.
///
/// Columns are located by their header title, so the file's column order
/// doesn't matter. Every column in `columns` must be present.
pub fn read_records(path: &Path, columns: &ColumnSpec) -> Result<Vec<Record>, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| read_error(path, e))?;

    let headers = reader.headers().map_err(|e| read_error(path, e))?.clone();

    let mut positions = Vec::with_capacity(columns.len());
    for (column, title) in columns.entries() {
        let index = headers
            .iter()
            .position(|h| h == title.as_str())
            .ok_or_else(|| ExportError::MissingColumn {
                path: path.display().to_string(),
                title: title.clone(),
            })?;
        positions.push((*column, index));
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| read_error(path, e))?;
        let mut record = Record::default();
        for (column, index) in &positions {
            record.set(*column, row.get(*index).unwrap_or("").to_string());
        }
        records.push(record);
    }

    Ok(records)
}

fn write_error(path: &Path, source: csv::Error) -> ExportError {
    ExportError::Write {
        path: path.display().to_string(),
        source,
    }
}

fn read_error(path: &Path, source: csv::Error) -> ExportError {
    ExportError::Read {
        path: path.display().to_string(),
        source,
    }
}
