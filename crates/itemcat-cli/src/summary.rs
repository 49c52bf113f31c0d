use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use itemcat_cli::types::MergeResult;

pub fn print_summary(result: &MergeResult) {
    println!("Output: {}", result.output.display());
    if let Some(path) = &result.report {
        println!("Run report: {}", path.display());
    }
    println!("Entries found: {}", result.entries);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Entries")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in &result.category_counts {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.entries).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let stats = &result.stats;
    println!(
        "Scanned {} records ({} short, {} filtered by category, {} missing id, {} without English name)",
        stats.records_scanned,
        stats.skipped_short,
        stats.skipped_category,
        stats.skipped_missing_id,
        stats.lookup_misses
    );
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
