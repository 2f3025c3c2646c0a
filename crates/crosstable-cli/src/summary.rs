use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crosstable_model::{DEFAULT_COLUMNS, Field, PlayerRecord, REQUIRED_FIELDS};
use crosstable_report::format_numeric;

use crate::types::{EventReport, ReportResult};

pub fn print_report(result: &ReportResult) {
    if result.used_sample {
        println!("No input files supplied; showing the embedded sample tournament.");
        println!();
    }
    for event in &result.events {
        print_event(event, result.top);
    }
    if let Some(totals) = &result.totals {
        print_totals(totals);
    }
    if let Some(detail) = &result.player {
        print_player_detail(&detail.name, &detail.rows);
    }
    if !result.exported.is_empty() {
        for path in &result.exported {
            println!("Exported: {}", path.display());
        }
    }
    if !result.errors.is_empty() {
        eprintln!("Skipped inputs:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_event(event: &EventReport, requested_top: usize) {
    match &event.label {
        Some(label) => println!("Event: {label}"),
        None => println!("Event: (untitled)"),
    }
    print_stats(event);
    print_standings("Standings", &event.standings, true);
    // A separate top slice is only worth printing when it actually truncates.
    if event.top.len() < event.standings.len() {
        print_standings(&format!("Top {}", requested_top), &event.top, true);
    }
    println!();
}

fn print_stats(event: &EventReport) {
    let stats = &event.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Players"),
        header_cell("Max Rating"),
        header_cell("Max Points"),
        header_cell("Mean Rating"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(stats.players),
        numeric_cell(stats.max_rating),
        numeric_cell(stats.max_points),
        numeric_cell(stats.mean_rating),
    ]);
    println!("{table}");
}

fn print_standings(title: &str, standings: &[PlayerRecord], medals: bool) {
    println!("{title}:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Player"),
        header_cell("Points"),
        header_cell("Rating"),
        header_cell("Tie Break"),
        header_cell("Performance"),
        header_cell("Event"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for (idx, record) in standings.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            player_cell(idx, record, medals),
            points_cell(record),
            numeric_cell(record.rating),
            text_cell(record.tie_break.as_deref()),
            text_cell(record.performance.as_deref()),
            text_cell(record.event.as_deref()),
        ]);
    }
    println!("{table}");
}

fn print_totals(totals: &[crosstable_model::PlayerTotal]) {
    println!("Cross-event totals:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Player"),
        header_cell("Total Points"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (idx, total) in totals.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&total.name),
            Cell::new(format_numeric(total.points)),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_player_detail(name: &str, rows: &[PlayerRecord]) {
    if rows.is_empty() {
        println!("Player {name}: no rows found (names match exactly).");
        println!();
        return;
    }
    print_standings(&format!("Player {name}"), rows, false);
    println!();
}

/// List the recognized input columns for the `columns` subcommand.
pub fn print_columns() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Required")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for field in DEFAULT_COLUMNS.iter().copied().chain([Field::Event]) {
        let required = if REQUIRED_FIELDS.contains(&field) {
            Cell::new("yes")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![Cell::new(field.header()), required]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Podium highlighting for the first three finishers.
fn player_cell(idx: usize, record: &PlayerRecord, medals: bool) -> Cell {
    if !medals {
        return Cell::new(&record.name);
    }
    match idx {
        0 => Cell::new(format!("🥇 {}", record.name))
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        1 => Cell::new(format!("🥈 {}", record.name)).fg(Color::White),
        2 => Cell::new(format!("🥉 {}", record.name)).fg(Color::DarkYellow),
        _ => Cell::new(&record.name),
    }
}

fn points_cell(record: &PlayerRecord) -> Cell {
    if record.points > 0.0 {
        Cell::new(format_numeric(record.points))
    } else {
        dim_cell(format_numeric(record.points))
    }
}

fn numeric_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_numeric(value)),
        None => dim_cell("-"),
    }
}

fn text_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
