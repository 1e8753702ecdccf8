mod node;

pub use node::{Cell, Row, Table};

/// Find a row by ID in a table.
pub fn find_row<'a>(table: &'a Table, id: &str) -> Option<&'a Row> {
    table.rows.iter().find(|row| row.id == id)
}

/// Find a cell by ID anywhere in a table.
pub fn find_cell<'a>(table: &'a Table, id: &str) -> Option<&'a Cell> {
    table
        .rows
        .iter()
        .flat_map(|row| row.cells.iter())
        .find(|cell| cell.id == id)
}
