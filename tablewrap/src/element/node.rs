use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A single table cell. Spans default to 1; the reflow transform is the only
/// thing in this crate that sets them to anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: String,
    pub content: String,
    pub classes: Vec<String>,
    pub rowspan: u16,
    pub colspan: u16,
}

impl Cell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("cell"),
            content: content.into(),
            classes: Vec::new(),
            rowspan: 1,
            colspan: 1,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn rowspan(mut self, rowspan: u16) -> Self {
        self.rowspan = rowspan;
        self
    }

    pub fn colspan(mut self, colspan: u16) -> Self {
        self.colspan = colspan;
        self
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A table row holding an ordered sequence of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub classes: Vec<String>,
    pub cells: Vec<Cell>,
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    pub fn new() -> Self {
        Self {
            id: generate_id("row"),
            classes: Vec::new(),
            cells: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn cells(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.cells.extend(cells);
        self
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Detach every cell at `index` and beyond, preserving order.
    /// Indices past the end detach nothing.
    pub fn split_off_cells(&mut self, index: usize) -> Vec<Cell> {
        if index >= self.cells.len() {
            return Vec::new();
        }
        self.cells.split_off(index)
    }

    /// Append cells to the end of this row, preserving their order.
    pub fn append_cells(&mut self, cells: &mut Vec<Cell>) {
        self.cells.append(cells);
    }
}

/// A table: an ordered sequence of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub id: String,
    pub classes: Vec<String>,
    pub rows: Vec<Row>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            id: generate_id("table"),
            classes: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Insert a row immediately after the row at `index`.
    pub fn insert_row_after(&mut self, index: usize, row: Row) {
        self.rows.insert(index + 1, row);
    }
}
