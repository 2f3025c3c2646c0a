//! Export output tests.

use crosstable_model::{CellValue, EventTable, Field, PlayerTotal, Row};
use crosstable_report::{export_csv, export_totals_csv, format_numeric};

fn sample_table() -> EventTable {
    let mut table = EventTable::new(
        None,
        vec![
            Field::Rank,
            Field::Name,
            Field::Rating,
            Field::Points,
            Field::TieBreak,
        ],
    );
    for (rank, name, rating, points, tie_break) in [
        ("1", "Alequis1991", "2306", "5.0", "10.0"),
        ("2", "maalta7", "2004", "3.5", "5.25"),
        ("3", "Rogeriox", "", "abc", "0.0"),
    ] {
        let mut row = Row::new();
        row.set(Field::Rank, CellValue::from_raw(rank));
        row.set(Field::Name, CellValue::from_raw(name));
        row.set(Field::Rating, CellValue::from_raw(rating));
        row.set(Field::Points, CellValue::from_raw(points));
        row.set(Field::TieBreak, CellValue::from_raw(tie_break));
        table.push_row(row);
    }
    table
}

#[test]
fn export_preserves_column_order_without_an_index() {
    let mut buffer = Vec::new();
    export_csv(&sample_table(), &mut buffer).expect("export csv");
    let output = String::from_utf8(buffer).expect("utf8 output");

    insta::assert_snapshot!(output, @r"
    Rank,Nomes dos Enxadristas,Rating,Points,Tie Break
    1,Alequis1991,2306,5,10.0
    2,maalta7,2004,3.5,5.25
    3,Rogeriox,,0,0.0
    ");
}

#[test]
fn export_header_matches_declared_columns() {
    let mut buffer = Vec::new();
    export_csv(&sample_table(), &mut buffer).expect("export csv");
    let output = String::from_utf8(buffer).expect("utf8 output");
    let header = output.lines().next().expect("header line");
    assert_eq!(header, "Rank,Nomes dos Enxadristas,Rating,Points,Tie Break");
    // Unparseable points are exported as the substituted zero.
    assert!(output.lines().nth(3).expect("third row").ends_with(",0,0.0"));
}

#[test]
fn totals_export_is_two_columns() {
    let totals = vec![
        PlayerTotal {
            name: "A".to_string(),
            points: 8.0,
        },
        PlayerTotal {
            name: "B".to_string(),
            points: 2.5,
        },
        PlayerTotal {
            name: "C".to_string(),
            points: 10.0,
        },
    ];
    let mut buffer = Vec::new();
    export_totals_csv(&totals, &mut buffer).expect("export totals");
    let output = String::from_utf8(buffer).expect("utf8 output");
    assert_eq!(output, "Nomes dos Enxadristas,Points\nA,8\nB,2.5\nC,10\n");
}

#[test]
fn export_to_path_writes_the_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("torneio_xadrez.csv");
    crosstable_report::export_csv_to_path(&sample_table(), &path).expect("export to path");
    let written = std::fs::read_to_string(&path).expect("read back");
    assert!(written.starts_with("Rank,Nomes dos Enxadristas"));
    assert_eq!(written.lines().count(), 4);
}

#[test]
fn numeric_formatting_trims_trailing_zeros() {
    assert_eq!(format_numeric(5.0), "5");
    assert_eq!(format_numeric(3.5), "3.5");
    assert_eq!(format_numeric(10.25), "10.25");
}

#[test]
fn numeric_formatting_keeps_significant_zeros() {
    // Whole numbers must survive untrimmed.
    assert_eq!(format_numeric(0.0), "0");
    assert_eq!(format_numeric(10.0), "10");
    assert_eq!(format_numeric(100.0), "100");
    assert_eq!(format_numeric(2.05), "2.05");
}
