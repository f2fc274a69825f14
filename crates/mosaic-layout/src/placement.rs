//! Row/column placement of items inside one section.
//!
//! Without a big item the section is a plain row-major grid. With a big
//! item in an `N`-column section the first item covers columns `0..N-1`
//! and rows `0..N-1`; items `1..N` stack one per row in the last column
//! beside it, and from item `N` onwards the row-major grid resumes below
//! the block:
//!
//! ```text
//! N = 3          N = 4
//! +-------+---+  +-----------+---+
//! |       | 1 |  |           | 1 |
//! |   0   +---+  |           +---+
//! |       | 2 |  |     0     | 2 |
//! +---+---+---+  |           +---+
//! | 3 | 4 | 5 |  |           | 3 |
//! +---+---+---+  +---+---+---+---+
//!                | 4 | 5 | 6 | 7 |
//!                +---+---+---+---+
//! ```

use serde::Serialize;

/// Whether an item is the promoted big cell or a regular grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CellKind {
    Big,
    Small,
}

impl CellKind {
    /// Only item 0 of a section that shows a big item is big.
    pub fn of(show_big: bool, item: usize) -> Self {
        if show_big && item == 0 {
            Self::Big
        } else {
            Self::Small
        }
    }
}

/// Grid coordinates of a cell's top-left track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Rows occupied by the big item's block in a `columns`-wide section.
pub fn big_block_rows(columns: usize) -> usize {
    columns.saturating_sub(1)
}

/// True when `item` sits beside the big cell rather than below it.
pub fn is_beside_big(columns: usize, show_big: bool, item: usize) -> bool {
    show_big && item > 0 && item < columns
}

/// Resolve the row and column of `item`.
///
/// `columns` must be at least 1, and at least 3 when `show_big` is set;
/// section resolution rejects anything else before placement runs.
pub fn position(columns: usize, show_big: bool, item: usize) -> GridPosition {
    debug_assert!(columns >= 1);
    debug_assert!(!show_big || columns >= 3);

    if CellKind::of(show_big, item) == CellKind::Big {
        return GridPosition::new(0, 0);
    }
    if is_beside_big(columns, show_big, item) {
        return GridPosition::new(item - 1, columns - 1);
    }
    if show_big {
        // The block stands in for the first grid row.
        let below = big_block_rows(columns) - 1;
        return GridPosition::new(item / columns + below, item % columns);
    }
    if columns > 1 {
        GridPosition::new(item / columns, item % columns)
    } else {
        GridPosition::new(item, 0)
    }
}

/// Number of grid rows a multi-column section needs for `item_count` items.
///
/// A big item turns its single row into a block of [`big_block_rows`] rows.
/// An empty section has no rows at all.
pub fn row_count(columns: usize, show_big: bool, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    let rows = item_count.div_ceil(columns);
    if show_big {
        rows + big_block_rows(columns) - 1
    } else {
        rows
    }
}
