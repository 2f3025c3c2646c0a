//! Ranking, top-N slicing, and player filtering.

use crosstable_model::PlayerRecord;

/// Orders records by points descending.
///
/// The sort is stable: rows with equal points keep their relative input
/// order, which is the pairing software's own tie order.
pub fn rank(records: &[PlayerRecord]) -> Vec<PlayerRecord> {
    let mut standings = records.to_vec();
    standings.sort_by(|a, b| b.points.total_cmp(&a.points));
    standings
}

/// The first `n` entries of an already-ranked sequence.
///
/// `n` is clamped to `[1, len]`; empty standings stay empty.
pub fn top_n(standings: &[PlayerRecord], n: usize) -> &[PlayerRecord] {
    if standings.is_empty() {
        return standings;
    }
    &standings[..n.clamp(1, standings.len())]
}

/// All records whose name exactly equals `name` (case-sensitive).
pub fn filter_by_player<'a>(records: &'a [PlayerRecord], name: &str) -> Vec<&'a PlayerRecord> {
    records.iter().filter(|record| record.name == name).collect()
}

/// Bar-chart series for the presentation layer: zero-point players dropped,
/// remaining entries ordered ascending so the leader lands at the top of a
/// horizontal chart.
pub fn chart_series(standings: &[PlayerRecord]) -> Vec<(String, f64)> {
    let mut series: Vec<(String, f64)> = standings
        .iter()
        .filter(|record| record.points > 0.0)
        .map(|record| (record.name.clone(), record.points))
        .collect();
    series.sort_by(|a, b| a.1.total_cmp(&b.1));
    series
}
