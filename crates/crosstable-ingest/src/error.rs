//! Error types for tournament data ingestion.

use std::path::PathBuf;

use thiserror::Error;

use crosstable_model::Field;

/// An input table lacks one or more required columns.
///
/// The offending table is skipped; the batch is never aborted.
#[derive(Debug, Error)]
#[error("missing required columns: {}", format_missing(.missing))]
pub struct SchemaMismatch {
    pub missing: Vec<Field>,
}

fn format_missing(missing: &[Field]) -> String {
    let names: Vec<&str> = missing.iter().map(|field| field.header()).collect();
    names.join(", ")
}

/// Errors that can occur while loading a tournament table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or parse a CSV file.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file parsed but does not carry the required columns.
    #[error("{path}: {source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaMismatch,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_names_missing_columns() {
        let err = SchemaMismatch {
            missing: vec![Field::Name, Field::Points],
        };
        assert_eq!(
            err.to_string(),
            "missing required columns: Nomes dos Enxadristas, Points"
        );
    }
}
