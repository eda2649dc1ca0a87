//! Reads a CSV export into an in-memory source table.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use board_model::SourceTable;

use crate::error::{IngestError, Result};

/// Reads the CSV at `path` into a [`SourceTable`] titled `title`.
///
/// The first record is the header row; headers are trimmed and stripped of
/// a BOM. Cell values are kept verbatim. Short records are padded with
/// empty cells so every row aligns with the header, and fully empty
/// records are dropped.
pub fn read_table(path: &Path, title: impl Into<String>) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|source| IngestError::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .iter()
            .map(normalize_header)
            .collect(),
        None => Vec::new(),
    };

    let mut table = SourceTable::new(title, headers);
    for record in records {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(table.columns.len());
        for index in 0..table.columns.len() {
            row.push(record.get(index).unwrap_or("").to_string());
        }
        table.push_row(row);
    }
    info!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.rows.len(),
        "read csv table"
    );
    Ok(table)
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}
