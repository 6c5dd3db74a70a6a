use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ExtractOutcome;

pub fn print_summary(outcome: &ExtractOutcome) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Pages read"), Cell::new(outcome.pages)]);
    if outcome.skipped_lines > 0 {
        table.add_row(vec![
            Cell::new("Undecodable lines").fg(Color::Yellow),
            Cell::new(outcome.skipped_lines).fg(Color::Yellow),
        ]);
    }
    for (reason, count) in &outcome.rejected {
        table.add_row(vec![
            Cell::new(format!("Rejected: {reason}")).fg(Color::Yellow),
            Cell::new(*count).fg(Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new(format!("{} emitted", outcome.kind.as_str()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(outcome.emitted).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");

    if let Some(path) = &outcome.output {
        eprintln!("Records written to {}", path.display());
    }
}

pub fn print_matches(matches: &[(String, asn_match::Match)]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Value"),
        header_cell("Best match"),
        header_cell("Ratio"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (value, found) in matches {
        table.add_row(vec![
            Cell::new(value),
            Cell::new(&found.candidate),
            Cell::new(format!("{:.3}", found.ratio)),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
