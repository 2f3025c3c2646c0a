//! Cross-event table merging with exact-duplicate removal.

use std::collections::BTreeSet;

use crosstable_model::{CellValue, EventTable, Field, REQUIRED_FIELDS, Row};

/// Result of merging several event tables.
#[derive(Debug)]
pub struct MergeOutcome {
    pub table: EventTable,
    /// One human-readable message per table that was skipped.
    pub skipped: Vec<String>,
}

/// Concatenates event tables into one, tagging rows with their source event.
///
/// Tables missing a required column are skipped and reported; the rest are
/// still merged. Rows identical across every column are kept once —
/// deduplication is full-row equality, never same-name collapsing, so two
/// submissions of the same player with different ratings both survive.
pub fn merge_events(tables: &[EventTable]) -> MergeOutcome {
    let mut skipped = Vec::new();
    let mut accepted: Vec<&EventTable> = Vec::new();
    for table in tables {
        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !table.has_column(**field))
            .map(|field| field.header())
            .collect();
        if missing.is_empty() {
            accepted.push(table);
        } else {
            let label = table.label.as_deref().unwrap_or("<unlabeled>");
            skipped.push(format!(
                "{label}: missing required columns: {}",
                missing.join(", ")
            ));
        }
    }

    // First-seen-order union over every accepted table, so a column present
    // only in a later table still reaches the merged schema and the dedupe key.
    let mut columns: Vec<Field> = Vec::new();
    for table in &accepted {
        for field in &table.columns {
            if !columns.contains(field) {
                columns.push(*field);
            }
        }
    }
    let tagging = accepted
        .iter()
        .any(|table| table.label.is_some() || table.has_column(Field::Event));
    if tagging && !columns.contains(&Field::Event) {
        columns.push(Field::Event);
    }

    let mut merged = EventTable::new(None, columns);
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut dropped = 0usize;
    for table in &accepted {
        for row in &table.rows {
            let mut tagged = row.clone();
            if tagging && tagged.text(Field::Event).is_none() {
                match &table.label {
                    Some(label) => tagged.set(Field::Event, CellValue::Text(label.clone())),
                    None => tagged.set(Field::Event, CellValue::Missing),
                }
            }
            if seen.insert(composite_key(&tagged, &merged.columns)) {
                merged.push_row(tagged);
            } else {
                dropped += 1;
            }
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, "exact-duplicate rows removed during merge");
    }
    MergeOutcome {
        table: merged,
        skipped,
    }
}

/// Composite dedupe key over every merged column; missing cells contribute
/// an empty segment so row shape stays part of the identity. Segments are
/// joined with the unit separator, a control character that does not appear
/// in tournament cell text, so cells containing `'|'` cannot collide across
/// field boundaries.
fn composite_key(row: &Row, columns: &[Field]) -> String {
    let mut composite = String::new();
    for (pos, field) in columns.iter().enumerate() {
        if pos > 0 {
            composite.push('\u{1f}');
        }
        composite.push_str(row.text(*field).unwrap_or(""));
    }
    composite
}
