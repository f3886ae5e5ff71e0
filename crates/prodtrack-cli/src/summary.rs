use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use prodtrack_model::{CompanyGroup, StepGroupConfig};
use prodtrack_transform::ColumnClassification;

pub fn print_company_summary(groups: &[CompanyGroup]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Company"),
        header_cell("Orders"),
        header_cell("Variants"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let mut total_orders = 0usize;
    for group in groups {
        total_orders += group.total_orders;
        table.add_row(vec![
            Cell::new(&group.base_company)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(group.total_orders),
            variants_cell(&group.variants),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_orders).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_classification(
    classification: &ColumnClassification,
    config: Option<&StepGroupConfig>,
) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);
    for column in &classification.sub_steps {
        table.add_row(vec![Cell::new(column), sub_step_cell()]);
    }
    for column in &classification.main_steps {
        table.add_row(vec![Cell::new(column), main_step_cell()]);
    }
    println!("{table}");
    let Some(config) = config else {
        return;
    };
    let mut rollup = Table::new();
    rollup.set_header(vec![
        header_cell("Status column"),
        header_cell("Sub-steps"),
    ]);
    apply_table_style(&mut rollup);
    for main in &classification.main_steps {
        let subs = config.subs_of(main);
        let subs_cell = if subs.is_empty() {
            dim_cell("(no sub-steps)")
        } else {
            Cell::new(subs.join(", "))
        };
        rollup.add_row(vec![Cell::new(main).fg(Color::Blue), subs_cell]);
    }
    println!();
    println!("Step groups:");
    println!("{rollup}");
}

pub fn apply_table_style(table: &mut Table) {
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

fn variants_cell(variants: &[String]) -> Cell {
    if variants.len() <= 1 {
        dim_cell("-")
    } else {
        Cell::new(variants.join(", "))
    }
}

fn sub_step_cell() -> Cell {
    Cell::new("sub-step").fg(Color::Green)
}

fn main_step_cell() -> Cell {
    Cell::new("status").fg(Color::Yellow).add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
