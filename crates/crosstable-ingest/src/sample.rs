//! Embedded demo tournament, used when no input file is supplied.

use crosstable_model::EventTable;

use crate::csv_table::read_csv_from_reader;
use crate::schema::build_event_table;

/// The six-player demo standings shipped with the original dashboard.
const SAMPLE_CSV: &str = "\
Rank,Title,Nomes dos Enxadristas,Rating,Points,Tie Break,Performance
1,,Alequis1991,2306,5.0,10.0,2480.2
2,,maalta7,2004,3.5,5.25,2240.6
3,,Capital78,2119,2.5,3.75,2017.6
4,,majCRVG,1800,2.0,2.5,1981.4
5,,ILUMINATE38,2289,2.0,2.0,1887.6
6,,Rogeriox,1709,0.0,0.0,1599.6
";

/// Builds the embedded sample table through the regular ingest path.
pub fn sample_table() -> EventTable {
    let raw = read_csv_from_reader(SAMPLE_CSV.as_bytes())
        .unwrap_or_else(|_| unreachable!("embedded sample data is valid CSV"));
    build_event_table(&raw, None)
        .unwrap_or_else(|_| unreachable!("embedded sample data carries the required columns"))
}
