pub mod fields;
pub mod records;
pub mod table;

pub use fields::{DEFAULT_COLUMNS, Field, REQUIRED_FIELDS};
pub use records::{EventStats, PlayerRecord, PlayerTotal};
pub use table::{CellValue, EventTable, Row};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_text_treats_missing_and_absent_alike() {
        let mut row = Row::new();
        row.set(Field::Name, CellValue::Text("Capital78".to_string()));
        row.set(Field::Rating, CellValue::Missing);

        assert_eq!(row.text(Field::Name), Some("Capital78"));
        assert_eq!(row.text(Field::Rating), None);
        assert_eq!(row.text(Field::Points), None);
    }

    #[test]
    fn cell_from_raw_trims_and_detects_missing() {
        assert_eq!(CellValue::from_raw("  2.5 "), CellValue::Text("2.5".to_string()));
        assert_eq!(CellValue::from_raw("   "), CellValue::Missing);
    }

    #[test]
    fn table_serializes() {
        let mut table = EventTable::new(
            Some("Ilheus Open".to_string()),
            vec![Field::Name, Field::Points],
        );
        let mut row = Row::new();
        row.set(Field::Name, CellValue::Text("maalta7".to_string()));
        row.set(Field::Points, CellValue::Text("3.5".to_string()));
        table.push_row(row);

        let json = serde_json::to_string(&table).expect("serialize table");
        let round: EventTable = serde_json::from_str(&json).expect("deserialize table");
        assert_eq!(round.label.as_deref(), Some("Ilheus Open"));
        assert_eq!(round.rows.len(), 1);
        assert_eq!(round.rows[0].text(Field::Points), Some("3.5"));
    }
}
