//! Human-readable tables for classified datasets.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use bmi_core::BmiClassifier;
use bmi_model::ClassifiedRecord;

fn header_cell(name: &str) -> Cell {
    Cell::new(name).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Print per-category counts with a total row.
pub fn print_summary(classifier: &BmiClassifier) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Health risk"),
        header_cell("Records"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);

    let mut categorized = 0usize;
    for category in classifier.distinct_categories() {
        let count = classifier.category_count(category);
        categorized += count;
        table.add_row(vec![
            Cell::new(category.as_str()),
            Cell::new(category.health_risk().as_str()),
            Cell::new(count),
        ]);
    }
    let uncategorized = classifier.len() - categorized;
    if uncategorized > 0 {
        table.add_row(vec![
            Cell::new("(no category)"),
            Cell::new("-"),
            Cell::new(uncategorized),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new("All records"),
        Cell::new(classifier.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

/// Print the leading classified rows.
pub fn print_head(records: &[ClassifiedRecord]) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Gender"),
        header_cell("HeightCm"),
        header_cell("WeightKg"),
        header_cell("BMI"),
        header_cell("Category"),
        header_cell("Health risk"),
    ]);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record in records {
        table.add_row(vec![
            Cell::new(record.gender.as_str()),
            Cell::new(record.height_cm),
            Cell::new(record.weight_kg),
            Cell::new(format!("{:.2}", record.bmi)),
            Cell::new(record.category.map_or("-", |category| category.as_str())),
            Cell::new(record.health_risk().map_or("-", |risk| risk.as_str())),
        ]);
    }
    println!("{table}");
}
