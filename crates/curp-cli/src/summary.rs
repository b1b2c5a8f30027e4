use std::collections::BTreeSet;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use curp_model::{Check, CurpAnalysis};
use curp_report::AnalysisSummary;

const MAX_REASON_SAMPLES: usize = 5;

pub fn print_batch_summary(analyses: &[CurpAnalysis]) {
    let summary = AnalysisSummary::from_analyses(analyses);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Status"),
        header_cell("Records"),
        header_cell("Percent"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let rows: [(&str, usize, Color); 3] = [
        ("Valid", summary.valid, Color::Green),
        ("Partially valid", summary.partial, Color::Yellow),
        ("Invalid", summary.invalid, Color::Red),
    ];
    for (label, count, color) in rows {
        table.add_row(vec![
            Cell::new(label).fg(color).add_attribute(Attribute::Bold),
            count_cell(count, color),
            Cell::new(format!("{:.1}%", summary.percentage(count))),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
        Cell::new("100.0%"),
    ]);
    println!("{table}");
    print_failure_table(analyses);
}

/// One row per component check that failed anywhere in the batch, with a
/// count and up to five distinct sample reasons.
fn print_failure_table(analyses: &[CurpAnalysis]) {
    let mut rows = Vec::new();
    for check in Check::ALL {
        let mut count = 0usize;
        let mut samples = BTreeSet::new();
        for analysis in analyses {
            for failure in &analysis.failures {
                if failure.check != check {
                    continue;
                }
                count += 1;
                if samples.len() < MAX_REASON_SAMPLES {
                    samples.insert(failure.reason.clone());
                }
            }
        }
        if count > 0 {
            let examples: Vec<String> = samples.into_iter().collect();
            rows.push((check, count, examples.join(", ")));
        }
    }
    if rows.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Failures"),
        header_cell("Sample reasons"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (check, count, examples) in rows {
        table.add_row(vec![
            Cell::new(check.label()),
            count_cell(count, Color::Red),
            Cell::new(examples),
        ]);
    }
    println!();
    println!("Failed checks:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
