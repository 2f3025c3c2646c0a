use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crosstable_model::{DEFAULT_COLUMNS, Field};

use crate::error::{IngestError, Result};

/// A raw CSV table: header cells plus untyped row cells.
///
/// Headers may be synthesized when the file arrived without a header row.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// True when the row looks like the pairing software's header line.
///
/// Export files sometimes arrive without a header row; those get the default
/// column set assigned positionally instead.
fn is_header_row(row: &[String]) -> bool {
    row.iter()
        .any(|cell| Field::from_header(&normalize_header(cell)).is_some())
}

pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
    read_csv_table_inner(reader).map_err(|source| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a raw table from any reader; used for embedded sample data.
pub fn read_csv_from_reader<R: Read>(reader: R) -> std::result::Result<CsvTable, csv::Error> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    read_csv_table_inner(reader)
}

fn read_csv_table_inner<R: Read>(
    mut reader: csv::Reader<R>,
) -> std::result::Result<CsvTable, csv::Error> {
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }

    let (headers, data_start) = if is_header_row(&raw_rows[0]) {
        let headers = raw_rows[0].iter().map(|cell| normalize_header(cell)).collect();
        (headers, 1)
    } else {
        tracing::debug!("no header row detected, assigning default columns");
        let headers = DEFAULT_COLUMNS
            .iter()
            .map(|field| field.header().to_string())
            .collect();
        (headers, 0)
    };

    let rows = raw_rows.split_off(data_start);
    Ok(CsvTable { headers, rows })
}
