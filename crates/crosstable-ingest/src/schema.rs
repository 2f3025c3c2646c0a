//! Header-to-field mapping and required-column validation.

use crosstable_model::{CellValue, EventTable, Field, REQUIRED_FIELDS, Row};

use crate::csv_table::CsvTable;
use crate::error::SchemaMismatch;

/// Builds a typed event table from a raw CSV table.
///
/// Headers are matched against the recognized column names; unknown columns
/// are ignored. Fails with [`SchemaMismatch`] when `Nomes dos Enxadristas`
/// or `Points` is absent.
pub fn build_event_table(
    table: &CsvTable,
    label: Option<String>,
) -> Result<EventTable, SchemaMismatch> {
    let mapped: Vec<Option<Field>> = table
        .headers
        .iter()
        .map(|header| Field::from_header(header))
        .collect();

    let mut columns: Vec<Field> = Vec::new();
    for field in mapped.iter().flatten() {
        if !columns.contains(field) {
            columns.push(*field);
        }
    }

    let missing: Vec<Field> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !columns.contains(field))
        .collect();
    if !missing.is_empty() {
        return Err(SchemaMismatch { missing });
    }

    let ignored = mapped.iter().filter(|field| field.is_none()).count();
    if ignored > 0 {
        tracing::debug!(ignored, "ignoring unrecognized columns");
    }

    let mut event_table = EventTable::new(label, columns);
    for raw_row in &table.rows {
        let mut row = Row::new();
        for (idx, field) in mapped.iter().enumerate() {
            let Some(field) = field else { continue };
            let value = raw_row.get(idx).map(String::as_str).unwrap_or("");
            row.set(*field, CellValue::from_raw(value));
        }
        event_table.push_row(row);
    }
    Ok(event_table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn maps_recognized_headers_in_file_order() {
        let table = raw(
            &["Rank", "Nomes dos Enxadristas", "Points", "Federation"],
            &[&["1", "Capital78", "2.5", "BRA"]],
        );
        let event = build_event_table(&table, None).expect("build table");
        assert_eq!(event.columns, vec![Field::Rank, Field::Name, Field::Points]);
        assert_eq!(event.rows[0].text(Field::Name), Some("Capital78"));
        assert_eq!(event.rows[0].text(Field::Points), Some("2.5"));
    }

    #[test]
    fn missing_points_column_is_a_schema_mismatch() {
        let table = raw(&["Rank", "Nomes dos Enxadristas"], &[&["1", "majCRVG"]]);
        let err = build_event_table(&table, None).expect_err("schema mismatch");
        assert_eq!(err.missing, vec![Field::Points]);
    }

    #[test]
    fn short_records_become_missing_cells() {
        let table = raw(
            &["Nomes dos Enxadristas", "Points", "Rating"],
            &[&["Rogeriox", "0.0"]],
        );
        let event = build_event_table(&table, None).expect("build table");
        assert_eq!(event.rows[0].text(Field::Rating), None);
    }
}
