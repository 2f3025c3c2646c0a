//! Report pipeline with explicit stages.
//!
//! 1. **Ingest**: load the requested CSV files (or the embedded sample),
//!    skipping and recording files that fail.
//! 2. **Normalize & rank**: derive typed records per event, compute
//!    standings, the top-N slice, and summary statistics.
//! 3. **Merge & aggregate**: with several events, merge tables (full-row
//!    dedupe) and accumulate per-player totals.
//! 4. **Export**: optionally write the processed table and the totals.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crosstable_core::{
    aggregate_by_player, event_stats, filter_by_player, merge_events, normalize_points, rank,
    top_n,
};
use crosstable_ingest::{load_event_tables, sample_table};
use crosstable_model::{EventTable, PlayerRecord, PlayerTotal};
use crosstable_report::{export_csv_to_path, export_totals_csv_to_path};

use crate::types::{EventReport, PlayerDetail, ReportResult};

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub files: Vec<PathBuf>,
    pub top: usize,
    pub player: Option<String>,
    pub export: Option<PathBuf>,
    pub export_totals: Option<PathBuf>,
}

pub fn run_report(options: &ReportOptions) -> Result<ReportResult> {
    // Stage 1: ingest.
    let (tables, mut errors, used_sample) = if options.files.is_empty() {
        warn!("no input files supplied, using the embedded sample data");
        (vec![sample_table()], Vec::new(), true)
    } else {
        let (tables, errors) = load_event_tables(&options.files);
        (tables, errors, false)
    };
    info!(tables = tables.len(), skipped = errors.len(), "ingest finished");

    // Stage 2: normalize and rank each event.
    let mut events = Vec::new();
    let mut all_records: Vec<PlayerRecord> = Vec::new();
    for table in &tables {
        let records = normalize_points(table);
        let standings = rank(&records);
        let top = top_n(&standings, options.top).to_vec();
        events.push(EventReport {
            label: table.label.clone(),
            stats: event_stats(&records),
            standings,
            top,
        });
        all_records.extend(records);
    }

    // Stage 3: merge and aggregate across events.
    let (merged, totals) = if tables.len() > 1 {
        let outcome = merge_events(&tables);
        errors.extend(outcome.skipped.iter().cloned());
        let merged_records = normalize_points(&outcome.table);
        let totals = aggregate_by_player(&merged_records);
        info!(
            rows = outcome.table.rows.len(),
            players = totals.len(),
            "merged events"
        );
        (Some(outcome.table), Some(totals))
    } else {
        (None, None)
    };

    let player = options.player.as_ref().map(|name| PlayerDetail {
        name: name.clone(),
        rows: filter_by_player(&all_records, name)
            .into_iter()
            .cloned()
            .collect(),
    });

    // Stage 4: export.
    let mut exported = Vec::new();
    if let Some(path) = &options.export {
        let table = export_table(merged.as_ref(), &tables);
        match table {
            Some(table) => {
                export_csv_to_path(table, path)
                    .with_context(|| format!("export table to {}", path.display()))?;
                info!(path = %path.display(), "wrote table export");
                exported.push(path.clone());
            }
            None => errors.push("nothing to export: no table was loaded".to_string()),
        }
    }
    if let Some(path) = &options.export_totals {
        let totals: Vec<PlayerTotal> = match &totals {
            Some(totals) => totals.clone(),
            None => aggregate_by_player(&all_records),
        };
        export_totals_csv_to_path(&totals, path)
            .with_context(|| format!("export totals to {}", path.display()))?;
        info!(path = %path.display(), "wrote totals export");
        exported.push(path.clone());
    }

    let has_errors = !errors.is_empty();
    Ok(ReportResult {
        events,
        totals,
        player,
        exported,
        errors,
        has_errors,
        used_sample,
        top: options.top,
    })
}

/// The table `--export` writes: the merged table with several inputs, the
/// single loaded table otherwise.
fn export_table<'a>(
    merged: Option<&'a EventTable>,
    tables: &'a [EventTable],
) -> Option<&'a EventTable> {
    merged.or_else(|| tables.first())
}
