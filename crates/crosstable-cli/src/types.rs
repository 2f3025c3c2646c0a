use std::path::PathBuf;

use crosstable_model::{EventStats, PlayerRecord, PlayerTotal};

#[derive(Debug)]
pub struct ReportResult {
    pub events: Vec<EventReport>,
    /// Cross-event totals, present when more than one table was merged.
    pub totals: Option<Vec<PlayerTotal>>,
    pub player: Option<PlayerDetail>,
    /// Files written by `--export` / `--export-totals`.
    pub exported: Vec<PathBuf>,
    /// One message per skipped input file.
    pub errors: Vec<String>,
    pub has_errors: bool,
    pub used_sample: bool,
    /// Requested top-N size (before clamping).
    pub top: usize,
}

#[derive(Debug)]
pub struct EventReport {
    pub label: Option<String>,
    pub stats: EventStats,
    pub standings: Vec<PlayerRecord>,
    pub top: Vec<PlayerRecord>,
}

#[derive(Debug)]
pub struct PlayerDetail {
    pub name: String,
    pub rows: Vec<PlayerRecord>,
}
