use tablewrap::{Cell, Options, Reflow, Row, SplitAt, Table};

fn table_with_rows(cell_counts: &[usize]) -> Table {
    let mut table = Table::new();
    for (r, &count) in cell_counts.iter().enumerate() {
        let mut row = Row::new();
        for c in 0..count {
            row = row.cell(Cell::new(format!("r{r}c{c}")));
        }
        table = table.row(row);
    }
    table
}

/// Attach at a width under the default breakpoint, so the table wraps
/// immediately.
fn wrap_one(table: Table, options: Options) -> Reflow {
    Reflow::attach(vec![table], options, 100)
}

fn contents(row: &Row) -> Vec<&str> {
    row.cells.iter().map(|c| c.content.as_str()).collect()
}

// ============================================================================
// The canonical six-cell scenario
// ============================================================================

#[test]
fn test_six_cell_row_default_options() {
    // splitAt auto with one header: (6 - 1) / 2 + 1 = 3, odd, bumped to 4.
    let reflow = wrap_one(table_with_rows(&[6]), Options::default());
    let table = &reflow.tables()[0];

    assert!(table.has_class("tw-wrapped"));
    assert_eq!(table.rows.len(), 2);

    let over = &table.rows[0];
    let under = &table.rows[1];
    assert!(over.has_class("tw-over"));
    assert!(under.has_class("tw-under"));

    assert_eq!(contents(over), ["r0c0", "r0c1", "r0c2", "r0c3"]);
    assert_eq!(contents(under), ["r0c4", "r0c5"]);

    // First cell spans both visual rows.
    assert_eq!(over.cells[0].rowspan, 2);
    assert!(over.cells[0].has_class("tw-header"));
    assert!(over.cells[1..].iter().all(|c| !c.has_class("tw-header")));
    assert!(under.cells.iter().all(|c| !c.has_class("tw-header")));

    // Over has 4 cells, under has 2, so the under row's last cell stretches.
    let last = under.cells.last().unwrap();
    assert_eq!(last.colspan, 2);
    assert!(last.has_class("tw-stretched"));
    assert!(over.cells.iter().all(|c| c.colspan == 1));
    assert_eq!(under.cells[0].colspan, 1);
}

// ============================================================================
// Split index computation
// ============================================================================

#[test]
fn test_auto_split_index_is_even_and_covers_headers() {
    // (cell count, header count, expected over-row length)
    let cases = [(6, 1, 4), (7, 1, 4), (5, 3, 4), (9, 2, 6), (2, 1, 2)];

    for (count, headers, expected) in cases {
        let reflow = wrap_one(
            table_with_rows(&[count]),
            Options::new().header_count(headers),
        );
        let over = &reflow.tables()[0].rows[0];
        assert_eq!(
            over.cells.len(),
            expected,
            "{count} cells with {headers} header(s)"
        );
        assert_eq!(expected % 2, 0, "split index must be even");
        assert!(expected >= headers, "split index must cover the headers");
    }
}

#[test]
fn test_fixed_split_index() {
    let reflow = wrap_one(
        table_with_rows(&[5]),
        Options::new().split_at(SplitAt::At(2)),
    );
    let table = &reflow.tables()[0];

    let over = &table.rows[0];
    let under = &table.rows[1];
    assert_eq!(contents(over), ["r0c0", "r0c1"]);
    assert_eq!(contents(under), ["r0c2", "r0c3", "r0c4"]);

    // Under is longer by 1, so the over row's last cell stretches by
    // 1 + header_count + 1 = 3.
    let last = over.cells.last().unwrap();
    assert_eq!(last.colspan, 3);
    assert!(last.has_class("tw-stretched"));
    assert!(under.cells.iter().all(|c| !c.has_class("tw-stretched")));
}

// ============================================================================
// Colspan balancing
// ============================================================================

#[test]
fn test_under_row_shorter_by_two_stretches_its_last_cell() {
    let reflow = wrap_one(
        table_with_rows(&[8]),
        Options::new().split_at(SplitAt::At(5)),
    );
    let table = &reflow.tables()[0];

    let over = &table.rows[0];
    let under = &table.rows[1];
    assert_eq!(over.cells.len(), 5);
    assert_eq!(under.cells.len(), 3);

    let last = under.cells.last().unwrap();
    assert_eq!(last.colspan, 2);
    assert!(last.has_class("tw-stretched"));

    // Everything else keeps colspan 1.
    assert!(over.cells.iter().all(|c| c.colspan == 1));
    assert!(under.cells[..2].iter().all(|c| c.colspan == 1));
}

#[test]
fn test_equal_halves_need_no_stretching() {
    // 4 cells, no headers: split index (4 - 0) / 2 = 2, already even.
    let reflow = wrap_one(table_with_rows(&[4]), Options::new().header_count(0));
    let table = &reflow.tables()[0];

    assert_eq!(table.rows[0].cells.len(), 2);
    assert_eq!(table.rows[1].cells.len(), 2);
    for row in &table.rows {
        assert!(row.cells.iter().all(|c| c.colspan == 1));
        assert!(row.cells.iter().all(|c| !c.has_class("tw-stretched")));
    }
}

// ============================================================================
// Degenerate rows
// ============================================================================

#[test]
fn test_split_index_past_end_inserts_empty_under_row() {
    let reflow = wrap_one(
        table_with_rows(&[3]),
        Options::new().split_at(SplitAt::At(10)),
    );
    let table = &reflow.tables()[0];

    assert_eq!(table.rows.len(), 2, "empty under row is still inserted");
    let over = &table.rows[0];
    let under = &table.rows[1];

    assert_eq!(over.cells.len(), 3);
    assert!(over.has_class("tw-over"));
    assert!(under.cells.is_empty());
    assert!(under.has_class("tw-under"));

    // Nothing to stretch in an empty row.
    assert!(over.cells.iter().all(|c| !c.has_class("tw-stretched")));
    assert_eq!(over.cells[0].rowspan, 2);
    assert!(over.cells[0].has_class("tw-header"));
}

#[test]
fn test_row_with_fewer_cells_than_header_count() {
    let reflow = wrap_one(table_with_rows(&[2]), Options::new().header_count(3));
    let table = &reflow.tables()[0];

    let over = &table.rows[0];
    let under = &table.rows[1];
    assert_eq!(over.cells.len(), 2, "nothing relocated");
    assert!(under.cells.is_empty());

    // All remaining cells fall inside the header prefix.
    for cell in &over.cells {
        assert_eq!(cell.rowspan, 2);
        assert!(cell.has_class("tw-header"));
    }
}

#[test]
fn test_header_count_zero_marks_no_headers() {
    let reflow = wrap_one(table_with_rows(&[6]), Options::new().header_count(0));
    let table = &reflow.tables()[0];

    // (6 - 0) / 2 = 3, odd, bumped to 4.
    assert_eq!(table.rows[0].cells.len(), 4);
    assert_eq!(table.rows[1].cells.len(), 2);
    for row in &table.rows {
        for cell in &row.cells {
            assert_eq!(cell.rowspan, 1);
            assert!(!cell.has_class("tw-header"));
        }
    }
}

#[test]
fn test_zero_row_table_only_gains_the_table_class() {
    let reflow = wrap_one(table_with_rows(&[]), Options::default());
    let table = &reflow.tables()[0];
    assert!(table.rows.is_empty());
    assert_eq!(table.classes, vec!["tw-wrapped".to_string()]);
}

// ============================================================================
// Multiple rows and custom prefixes
// ============================================================================

#[test]
fn test_each_row_is_wrapped_independently() {
    let reflow = wrap_one(table_with_rows(&[6, 3]), Options::default());
    let table = &reflow.tables()[0];

    assert_eq!(table.rows.len(), 4, "one under row per original row");
    assert_eq!(contents(&table.rows[0]), ["r0c0", "r0c1", "r0c2", "r0c3"]);
    assert_eq!(contents(&table.rows[1]), ["r0c4", "r0c5"]);
    // 3 cells: (3 - 1) / 2 + 1 = 2, already even.
    assert_eq!(contents(&table.rows[2]), ["r1c0", "r1c1"]);
    assert_eq!(contents(&table.rows[3]), ["r1c2"]);

    // Over 2 vs under 1: colspan 1 is still written, with the class.
    let last = table.rows[3].cells.last().unwrap();
    assert_eq!(last.colspan, 1);
    assert!(last.has_class("tw-stretched"));
}

#[test]
fn test_custom_class_prefix() {
    let reflow = wrap_one(table_with_rows(&[6]), Options::new().class_prefix("x-"));
    let table = &reflow.tables()[0];

    assert!(table.has_class("x-wrapped"));
    assert!(table.rows[0].has_class("x-over"));
    assert!(table.rows[1].has_class("x-under"));
    assert!(table.rows[0].cells[0].has_class("x-header"));
    assert!(table.rows[1].cells.last().unwrap().has_class("x-stretched"));
}
