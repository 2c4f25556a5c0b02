use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use phraseforge::export::ExportRecord;

pub const PREVIEW_ROWS: usize = 10;

/// Prints the highest-ranked exported phrases.
pub fn preview(records: &[ExportRecord], rows: usize) {
    if records.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Phrase").add_attribute(Attribute::Bold),
        Cell::new("Freq").fg(Color::Cyan),
    ]);

    for idx in [0, 2] {
        if let Some(col) = table.column_mut(idx) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, record) in records.iter().take(rows).enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&record.phrase),
            Cell::new(record.frequency).fg(Color::Cyan),
        ]);
    }

    println!("{table}");
}
