//! CSV reading operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, StringChunked}};

use crate::error::PipelineError;

/// Reads a CSV file with a header row, keeping every column as a string.
pub(crate) fn read_csv_strings(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|e| PipelineError::MalformedCsv { path: path.to_path_buf(), reason: e.to_string() }.into())
}

/// Project `columns` out of a string DataFrame, row by row.
/// Absent columns and null cells read as empty strings.
pub(crate) fn string_rows(df: &DataFrame, columns: &[&str]) -> Result<Vec<Vec<String>>> {
    let selected = columns.iter()
        .map(|&name| match df.column(name) {
            Ok(column) => column.str()
                .map(Some)
                .with_context(|| format!("[io::csv::read] Column {name} is not a string column")),
            Err(_) => Ok(None),
        })
        .collect::<Result<Vec<Option<&StringChunked>>>>()?;

    Ok((0..df.height())
        .map(|row| selected.iter()
            .map(|&column| column
                .and_then(|ca| ca.get(row))
                .unwrap_or_default()
                .to_string())
            .collect())
        .collect())
}
