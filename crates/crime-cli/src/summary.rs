//! Console summary printed after a successful run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Kind"),
        header_cell("Rows read"),
        header_cell("Kept"),
        header_cell("Dropped"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    for idx in 2..5 {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for source in &summary.sources {
        let name = source
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.source.display().to_string());
        table.add_row(vec![
            Cell::new(name),
            kind_cell(source.kind.label()),
            Cell::new(source.rows_in),
            Cell::new(source.rows_kept),
            dropped_cell(source.rows_dropped),
        ]);
    }
    println!("{table}");

    if summary.extracts_skipped > 0 {
        println!(
            "Skipped {} of {} extracts (unreadable).",
            summary.extracts_skipped, summary.extracts_found
        );
    }
    println!(
        "Excluded {} supplementary rows inside the authoritative interval.",
        summary.supplementary_excluded
    );
    println!("Dropped {} duplicate rows.", summary.duplicates_dropped);
    match summary.date_range {
        Some((earliest, latest)) => println!(
            "Final dataset: {} rows covering {earliest} to {latest}.",
            summary.final_rows
        ),
        None => println!("Final dataset is empty."),
    }
    println!("Output: {}", summary.output_path.display());
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn kind_cell(label: &str) -> Cell {
    if label == "workbook" {
        Cell::new(label)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(label)
    }
}

fn dropped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
