//! Plain-text table rendering for demos and debugging. Places cells on a
//! grid the way a browser lays out a table: rowspans reserve slots in the
//! rows below, colspans reserve slots to the right.

use unicode_width::UnicodeWidthStr;

use crate::element::Table;

const SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy)]
struct Slot {
    /// Row index into the table.
    row: usize,
    /// Cell index within that row.
    idx: usize,
    /// Grid coordinates of the cell's top-left slot.
    top: usize,
    left: usize,
}

/// Render a table to text lines, one per grid row, honoring spans.
/// Column widths are display widths, so wide characters line up.
pub fn render_table(table: &Table) -> Vec<String> {
    let grid = place(table);
    let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
    if cols == 0 {
        return Vec::new();
    }
    let widths = column_widths(table, &grid, cols);

    let mut lines = Vec::with_capacity(grid.len());
    for (r, slots) in grid.iter().enumerate() {
        let mut line = String::new();
        let mut c = 0;
        while c < cols {
            if c > 0 {
                line.push_str(SEPARATOR);
            }
            let (text, span) = match slots.get(c).copied().flatten() {
                Some(slot) => {
                    let cell = &table.rows[slot.row].cells[slot.idx];
                    // Content is drawn once, at the cell's top-left slot;
                    // spanned slots stay blank.
                    let text = if r == slot.top && c == slot.left {
                        cell.content.as_str()
                    } else {
                        ""
                    };
                    (text, cell.colspan.max(1) as usize)
                }
                None => ("", 1),
            };
            let span = span.min(cols - c);
            let region =
                widths[c..c + span].iter().sum::<usize>() + SEPARATOR.len() * (span - 1);
            line.push_str(text);
            for _ in 0..region.saturating_sub(text.width()) {
                line.push(' ');
            }
            c += span;
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

fn place(table: &Table) -> Vec<Vec<Option<Slot>>> {
    let mut grid: Vec<Vec<Option<Slot>>> = Vec::new();
    for (r, row) in table.rows.iter().enumerate() {
        if grid.len() <= r {
            grid.push(Vec::new());
        }
        let mut c = 0;
        for (idx, cell) in row.cells.iter().enumerate() {
            // Skip slots already reserved by rowspans from rows above.
            while taken(&grid, r, c) {
                c += 1;
            }
            let rowspan = cell.rowspan.max(1) as usize;
            let colspan = cell.colspan.max(1) as usize;
            for dr in 0..rowspan {
                for dc in 0..colspan {
                    set(
                        &mut grid,
                        r + dr,
                        c + dc,
                        Slot {
                            row: r,
                            idx,
                            top: r,
                            left: c,
                        },
                    );
                }
            }
            c += colspan;
        }
    }
    grid
}

fn column_widths(table: &Table, grid: &[Vec<Option<Slot>>], cols: usize) -> Vec<usize> {
    let mut widths = vec![0usize; cols];

    // Single-column cells set the track widths.
    for (r, slots) in grid.iter().enumerate() {
        for (c, slot) in slots.iter().enumerate() {
            let Some(slot) = slot else { continue };
            if slot.top != r || slot.left != c {
                continue;
            }
            let cell = &table.rows[slot.row].cells[slot.idx];
            if cell.colspan.max(1) == 1 {
                widths[c] = widths[c].max(cell.content.width());
            }
        }
    }

    // Spanning cells widen their last track when the merged region is still
    // too narrow for their content.
    for (r, slots) in grid.iter().enumerate() {
        for (c, slot) in slots.iter().enumerate() {
            let Some(slot) = slot else { continue };
            if slot.top != r || slot.left != c {
                continue;
            }
            let cell = &table.rows[slot.row].cells[slot.idx];
            let span = (cell.colspan.max(1) as usize).min(cols - c);
            if span > 1 {
                let have =
                    widths[c..c + span].iter().sum::<usize>() + SEPARATOR.len() * (span - 1);
                let need = cell.content.width();
                if need > have {
                    widths[c + span - 1] += need - have;
                }
            }
        }
    }

    widths
}

fn taken(grid: &[Vec<Option<Slot>>], r: usize, c: usize) -> bool {
    grid.get(r)
        .and_then(|row| row.get(c))
        .map(Option::is_some)
        .unwrap_or(false)
}

fn set(grid: &mut Vec<Vec<Option<Slot>>>, r: usize, c: usize, slot: Slot) {
    while grid.len() <= r {
        grid.push(Vec::new());
    }
    let row = &mut grid[r];
    while row.len() <= c {
        row.push(None);
    }
    row[c] = Some(slot);
}
