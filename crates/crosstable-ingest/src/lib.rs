//! Tournament data ingestion: CSV loading, header recognition, and schema
//! validation.
//!
//! A loaded file becomes an [`EventTable`] tagged with its file stem as the
//! event label. Files missing a required column are skipped and reported;
//! the rest of the batch is still processed.

use std::path::Path;

use crosstable_model::EventTable;

pub mod csv_table;
pub mod error;
pub mod sample;
pub mod schema;

pub use csv_table::{CsvTable, read_csv_from_reader, read_csv_table};
pub use error::{IngestError, Result, SchemaMismatch};
pub use sample::sample_table;
pub use schema::build_event_table;

/// Loads a single tournament table from a CSV file.
pub fn load_event_table(path: &Path) -> Result<EventTable> {
    let raw = read_csv_table(path)?;
    let label = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned());
    let table = build_event_table(&raw, label).map_err(|source| IngestError::Schema {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        rows = table.rows.len(),
        columns = table.columns.len(),
        "loaded event table"
    );
    Ok(table)
}

/// Loads many tournament files, skipping the ones that fail.
///
/// Returns the successfully loaded tables plus a human-readable message per
/// skipped file.
pub fn load_event_tables(paths: &[impl AsRef<Path>]) -> (Vec<EventTable>, Vec<String>) {
    let mut tables = Vec::new();
    let mut errors = Vec::new();
    for path in paths {
        match load_event_table(path.as_ref()) {
            Ok(table) => tables.push(table),
            Err(error) => {
                tracing::warn!(%error, "skipping input file");
                errors.push(error.to_string());
            }
        }
    }
    (tables, errors)
}
