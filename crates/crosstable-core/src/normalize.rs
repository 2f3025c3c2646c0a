//! Numeric normalization of raw table cells.
//!
//! Points use a deliberately lenient policy inherited from the source data:
//! a missing, empty, or unparseable score becomes `0.0` and is never
//! rejected. That substitution is the single place a malformed score can
//! silently turn into a zero, so it lives here as an explicit step rather
//! than being folded into parsing.

use crosstable_model::{EventTable, Field, PlayerRecord};

/// Parses a string as f64, returning None for invalid or empty strings.
///
/// A literal `NaN` parses but carries no usable score, so it is treated as
/// unparseable; otherwise it would poison totals and sort above every
/// real number.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Coerces a raw points cell to a number, zero-filling anything unparseable.
pub fn parse_points(raw: Option<&str>) -> f64 {
    raw.and_then(parse_f64).unwrap_or(0.0)
}

/// Derives typed player records from a raw event table.
///
/// Every row survives: a row without a readable name keeps an empty name
/// rather than being dropped, so counts stay consistent with the source
/// table. Ratings stay missing when unparseable; only points zero-fill.
pub fn normalize_points(table: &EventTable) -> Vec<PlayerRecord> {
    let mut zero_filled = 0usize;
    let records: Vec<PlayerRecord> = table
        .rows
        .iter()
        .map(|row| {
            let raw_points = row.text(Field::Points);
            if raw_points.and_then(parse_f64).is_none() {
                zero_filled += 1;
            }
            PlayerRecord {
                name: row.text(Field::Name).unwrap_or("").to_string(),
                rating: row.text(Field::Rating).and_then(parse_f64),
                points: parse_points(raw_points),
                tie_break: row.text(Field::TieBreak).map(str::to_string),
                performance: row.text(Field::Performance).map(str::to_string),
                event: row
                    .text(Field::Event)
                    .map(str::to_string)
                    .or_else(|| table.label.clone()),
            }
        })
        .collect();
    if zero_filled > 0 {
        tracing::debug!(zero_filled, "points cells substituted with 0.0");
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_points_zero_fills_bad_values() {
        assert_eq!(parse_points(None), 0.0);
        assert_eq!(parse_points(Some("")), 0.0);
        assert_eq!(parse_points(Some("abc")), 0.0);
        assert_eq!(parse_points(Some("3.5")), 3.5);
    }

    #[test]
    fn parse_points_zero_fills_nan_literals() {
        assert_eq!(parse_points(Some("NaN")), 0.0);
        assert_eq!(parse_points(Some("nan")), 0.0);
        assert_eq!(parse_f64("NaN"), None);
    }

    #[test]
    fn parse_f64_rejects_blank_input() {
        assert_eq!(parse_f64("  "), None);
        assert_eq!(parse_f64(" 2306 "), Some(2306.0));
    }
}
