use std::io;

use crossterm::event::Event as CrosstermEvent;

use crate::config::{Classes, Options, SplitAt};
use crate::element::{Row, Table};
use crate::viewport;

/// Whether the attached tables currently hold the wrapped structure.
/// Flips only when a breakpoint crossing is detected, never on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflowState {
    Unwrapped,
    Wrapped,
}

/// Reflows attached tables when the viewport crosses the configured
/// breakpoint. Owns its target set for the lifetime of the attachment;
/// `detach` hands the tables back, restored if necessary.
#[derive(Debug)]
pub struct Reflow {
    options: Options,
    classes: Classes,
    state: ReflowState,
    tables: Vec<Table>,
}

impl Reflow {
    /// Attach to a set of tables and immediately evaluate `viewport_width`,
    /// so the initial structure matches the current viewport.
    pub fn attach(tables: Vec<Table>, options: Options, viewport_width: u16) -> Self {
        let classes = Classes::derive(&options.class_prefix);
        let mut reflow = Self {
            options,
            classes,
            state: ReflowState::Unwrapped,
            tables,
        };
        reflow.check_size(viewport_width);
        reflow
    }

    /// Attach using the current terminal width.
    pub fn attach_to_viewport(tables: Vec<Table>, options: Options) -> io::Result<Self> {
        let width = viewport::width()?;
        Ok(Self::attach(tables, options, width))
    }

    pub fn state(&self) -> ReflowState {
        self.state
    }

    pub fn is_wrapped(&self) -> bool {
        self.state == ReflowState::Wrapped
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn classes(&self) -> &Classes {
        &self.classes
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Mutable access for content edits. Structural edits between a wrap and
    /// its matching unwrap are the caller's responsibility.
    pub fn tables_mut(&mut self) -> &mut [Table] {
        &mut self.tables
    }

    /// Evaluate a viewport width and wrap or unwrap on a breakpoint crossing.
    /// A no-op when the width lands on the same side as the current state.
    pub fn check_size(&mut self, width: u16) {
        if width <= self.options.breakpoint && self.state == ReflowState::Unwrapped {
            log::debug!(
                "[reflow] width {} <= breakpoint {}, wrapping {} table(s)",
                width,
                self.options.breakpoint,
                self.tables.len()
            );
            self.state = ReflowState::Wrapped;
            for table in &mut self.tables {
                wrap_table(table, &self.options, &self.classes);
            }
        } else if width > self.options.breakpoint && self.state == ReflowState::Wrapped {
            log::debug!(
                "[reflow] width {} > breakpoint {}, unwrapping {} table(s)",
                width,
                self.options.breakpoint,
                self.tables.len()
            );
            self.state = ReflowState::Unwrapped;
            for table in &mut self.tables {
                unwrap_table(table, &self.classes);
            }
        }
    }

    /// Process raw crossterm events; only resizes are of interest here.
    pub fn process_events(&mut self, events: &[CrosstermEvent]) {
        for event in events {
            if let CrosstermEvent::Resize(width, _height) = event {
                self.check_size(*width);
            }
        }
    }

    /// Hand the tables back, unwrapping first if currently wrapped.
    pub fn detach(mut self) -> Vec<Table> {
        if self.state == ReflowState::Wrapped {
            for table in &mut self.tables {
                unwrap_table(table, &self.classes);
            }
        }
        self.tables
    }
}

/// Index of the first cell to relocate into the under row.
fn split_index(cell_count: usize, options: &Options) -> usize {
    match options.split_at {
        SplitAt::At(index) => index,
        SplitAt::Auto => {
            let mut index = cell_count.saturating_sub(options.header_count) / 2
                + options.header_count;
            // Bump odd indices to even. This targets an even split *index*,
            // not an even number of cells per side, so the over side gets any
            // extra columns.
            if index % 2 != 0 {
                index += 1;
            }
            index
        }
    }
}

/// For every row present at invocation time, relocate the trailing cells into
/// a freshly inserted row directly underneath.
fn wrap_table(table: &mut Table, options: &Options, classes: &Classes) {
    table.add_class(&classes.table);

    let mut i = 0;
    while i < table.rows.len() {
        let split = split_index(table.rows[i].cells.len(), options);
        let moved = table.rows[i].split_off_cells(split);

        let mut under = Row::new();
        under.cells = moved;
        under.add_class(&classes.under);

        {
            let over = &mut table.rows[i];
            for cell in over.cells.iter_mut().take(options.header_count) {
                cell.rowspan = 2;
                cell.add_class(&classes.header);
            }
            over.add_class(&classes.over);

            // If the two rows end up with different cell counts, stretch the
            // last cell of the shorter one so both span the full table width.
            let diff = over.cells.len() as i64 - under.cells.len() as i64;
            if diff > 0 {
                // An empty under row has no cell to stretch; it still gets
                // inserted below.
                if let Some(last) = under.cells.last_mut() {
                    last.colspan = diff as u16;
                    last.add_class(&classes.stretched);
                }
            } else if diff < 0 {
                if let Some(last) = over.cells.last_mut() {
                    last.colspan = (-diff) as u16 + options.header_count as u16 + 1;
                    last.add_class(&classes.stretched);
                }
            }
        }

        table.insert_row_after(i, under);
        // Skip the row just inserted.
        i += 2;
    }
}

/// Inverse of `wrap_table`: reunite each under row with the row above it and
/// strip every class and span the wrap introduced.
fn unwrap_table(table: &mut Table, classes: &Classes) {
    let mut i = 0;
    while i < table.rows.len() {
        if i > 0 && table.rows[i].has_class(&classes.under) {
            let mut under = table.rows.remove(i);
            table.rows[i - 1].append_cells(&mut under.cells);
        } else {
            i += 1;
        }
    }

    for row in &mut table.rows {
        row.remove_class(&classes.over);
        row.remove_class(&classes.under);
        for cell in &mut row.cells {
            if cell.has_class(&classes.header) {
                cell.rowspan = 1;
                cell.remove_class(&classes.header);
            }
            if cell.has_class(&classes.stretched) {
                cell.colspan = 1;
                cell.remove_class(&classes.stretched);
            }
        }
    }

    table.remove_class(&classes.table);
}
