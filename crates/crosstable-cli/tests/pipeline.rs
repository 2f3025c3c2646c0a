//! End-to-end pipeline tests over real files.

use std::fs;
use std::path::PathBuf;

use crosstable_cli::pipeline::{ReportOptions, run_report};

fn options(files: Vec<PathBuf>) -> ReportOptions {
    ReportOptions {
        files,
        top: 10,
        player: None,
        export: None,
        export_totals: None,
    }
}

#[test]
fn sample_fallback_reports_six_players() {
    let result = run_report(&options(Vec::new())).expect("run report");
    assert!(result.used_sample);
    assert!(!result.has_errors);
    assert_eq!(result.events.len(), 1);

    let event = &result.events[0];
    assert_eq!(event.stats.players, 6);
    assert_eq!(event.standings[0].name, "Alequis1991");
    assert_eq!(event.standings[0].points, 5.0);
    // Six rows available, so the top-10 request clamps to all of them.
    assert_eq!(event.top.len(), 6);
    assert!(result.totals.is_none());
}

#[test]
fn two_files_produce_totals_and_a_skipped_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let round1 = dir.path().join("round1.csv");
    let round2 = dir.path().join("round2.csv");
    let broken = dir.path().join("broken.csv");
    fs::write(
        &round1,
        "Nomes dos Enxadristas,Points\nAlequis1991,5.0\nmaalta7,3.5\n",
    )
    .expect("write round1");
    fs::write(
        &round2,
        "Nomes dos Enxadristas,Points\nAlequis1991,3.0\nCapital78,4.0\n",
    )
    .expect("write round2");
    fs::write(&broken, "Rank,Rating\n1,2300\n").expect("write broken");

    let result =
        run_report(&options(vec![round1, round2, broken])).expect("run report");
    assert_eq!(result.events.len(), 2);
    assert!(result.has_errors);
    assert_eq!(result.errors.len(), 1);

    let totals = result.totals.as_ref().expect("cross-event totals");
    assert_eq!(totals[0].name, "Alequis1991");
    assert_eq!(totals[0].points, 8.0);
}

#[test]
fn export_writes_merged_csv_and_totals() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let round1 = dir.path().join("round1.csv");
    let round2 = dir.path().join("round2.csv");
    fs::write(
        &round1,
        "Nomes dos Enxadristas,Points\nAlequis1991,5.0\n",
    )
    .expect("write round1");
    fs::write(
        &round2,
        "Nomes dos Enxadristas,Points\nAlequis1991,3.0\n",
    )
    .expect("write round2");

    let export = dir.path().join("merged.csv");
    let export_totals = dir.path().join("totals.csv");
    let mut opts = options(vec![round1, round2]);
    opts.export = Some(export.clone());
    opts.export_totals = Some(export_totals.clone());

    let result = run_report(&opts).expect("run report");
    assert_eq!(result.exported.len(), 2);

    let merged = fs::read_to_string(&export).expect("read merged export");
    // Merged rows carry the source event tag; both rows survive dedupe.
    assert_eq!(
        merged,
        "Nomes dos Enxadristas,Points,Torneio\nAlequis1991,5,round1\nAlequis1991,3,round2\n"
    );

    let totals = fs::read_to_string(&export_totals).expect("read totals export");
    assert_eq!(totals, "Nomes dos Enxadristas,Points\nAlequis1991,8\n");
}

#[test]
fn player_filter_is_exact() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let file = dir.path().join("open.csv");
    fs::write(
        &file,
        "Nomes dos Enxadristas,Points\nAlequis1991,5.0\nmaalta7,3.5\n",
    )
    .expect("write csv");

    let mut opts = options(vec![file]);
    opts.player = Some("maalta7".to_string());
    let result = run_report(&opts).expect("run report");
    let detail = result.player.as_ref().expect("player detail");
    assert_eq!(detail.rows.len(), 1);
    assert_eq!(detail.rows[0].points, 3.5);
}
