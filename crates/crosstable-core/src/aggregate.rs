//! Cross-event accumulation by player name.

use std::collections::HashMap;

use crosstable_model::{PlayerRecord, PlayerTotal};

/// Sums points per player name across all supplied records.
///
/// Totals are ordered descending; equal totals keep first-seen player order
/// (the accumulation is in input order and the final sort is stable).
pub fn aggregate_by_player(records: &[PlayerRecord]) -> Vec<PlayerTotal> {
    let mut totals: Vec<PlayerTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in records {
        match index.get(record.name.as_str()) {
            Some(&idx) => totals[idx].points += record.points,
            None => {
                index.insert(record.name.as_str(), totals.len());
                totals.push(PlayerTotal {
                    name: record.name.clone(),
                    points: record.points,
                });
            }
        }
    }
    totals.sort_by(|a, b| b.points.total_cmp(&a.points));
    totals
}
