use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabula_model::{ImportResult, split_row};

/// Render imported rows as a table, one cell per delimited column.
pub fn import_table(result: &ImportResult, start_row: u32) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let width = result
        .rows
        .iter()
        .map(|line| split_row(line).len())
        .max()
        .unwrap_or(0);
    let mut header = vec![header_cell("#")];
    header.extend((1..=width).map(|column| header_cell(&format!("C{column}"))));
    table.set_header(header);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    // Failed rows are skipped in `rows`, so walk sheet positions alongside.
    let mut sheet_row = start_row;
    for line in &result.rows {
        while result.failed_rows.contains(&sheet_row) {
            sheet_row += 1;
        }
        let mut cells = vec![Cell::new(sheet_row)];
        cells.extend(split_row(line).into_iter().map(Cell::new));
        table.add_row(cells);
        sheet_row += 1;
    }
    table
}

pub fn print_import(result: &ImportResult, start_row: u32) {
    if result.rows.is_empty() {
        println!("No rows imported.");
    } else {
        println!("{}", import_table(result, start_row));
    }
    if result.has_failures() {
        let failed: Vec<String> = result.failed_rows.iter().map(u32::to_string).collect();
        println!("Failed rows: {}", failed.join(", "));
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_numbered_by_sheet_position() {
        let result = ImportResult {
            rows: vec!["a|1|".to_string(), "c|3|".to_string()],
            failed_rows: vec![3],
        };
        let table = import_table(&result, 2);
        let rendered = table.to_string();
        assert_eq!(table.row_count(), 2);
        assert!(rendered.contains("C2"));
        let first: Vec<String> = table.row(0).unwrap().cell_iter().map(Cell::content).collect();
        let second: Vec<String> = table.row(1).unwrap().cell_iter().map(Cell::content).collect();
        assert_eq!(first, vec!["2", "a", "1"]);
        assert_eq!(second, vec!["4", "c", "3"]);
    }
}
