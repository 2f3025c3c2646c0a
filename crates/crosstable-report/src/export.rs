use std::fs::File;
use std::io::Write;
use std::path::Path;

use crosstable_core::parse_points;
use crosstable_model::{EventTable, Field, PlayerTotal};

use crate::error::{ExportError, Result};

/// Formats a floating-point number as a string without trailing zeros.
///
/// Whole numbers already render without a decimal point, so trimming only
/// applies to fractional renderings; otherwise `10.0` would lose its zero.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Serializes an event table back to CSV.
///
/// The declared column order is preserved and no index column is added.
/// `Points` is written in normalized numeric form; every other cell is
/// written as ingested, with missing cells as empty fields.
pub fn export_csv<W: Write>(table: &EventTable, writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(table.columns.iter().map(|field| field.header()))?;
    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|field| match field {
                Field::Points => format_numeric(parse_points(row.text(Field::Points))),
                _ => row.text(*field).unwrap_or("").to_string(),
            })
            .collect();
        out.write_record(&record)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes an event table to a CSV file at `path`.
pub fn export_csv_to_path(table: &EventTable, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ExportError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    export_csv(table, file)
}

/// Serializes cross-event totals as a two-column CSV.
pub fn export_totals_csv<W: Write>(totals: &[PlayerTotal], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([Field::Name.header(), Field::Points.header()])?;
    for total in totals {
        out.write_record([total.name.as_str(), format_numeric(total.points).as_str()])?;
    }
    out.flush()?;
    Ok(())
}

/// Writes cross-event totals to a CSV file at `path`.
pub fn export_totals_csv_to_path(totals: &[PlayerTotal], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ExportError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    export_totals_csv(totals, file)
}
