//! Per-column slot counters. Pieces stack from row 0 upwards, so the k-th
//! piece dropped into a column lands in row `k - 1`.

use crate::common::Cell;
use crate::config::{CELLS, COLS};

/// Next free cell index for every column, plus a sticky "full" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnHeights {
    next: [usize; COLS],
    full: [bool; COLS],
}

impl ColumnHeights {
    /// All columns empty: each counter points at the bottom cell of its column.
    pub fn new() -> Self {
        ColumnHeights {
            next: core::array::from_fn(|col| col),
            full: [false; COLS],
        }
    }

    /// Cell the next piece in `column` would occupy, or `None` when the column
    /// is full or does not exist.
    pub fn next_slot(&self, column: usize) -> Option<Cell> {
        if self.is_full(column) {
            return None;
        }
        Cell::from_index(self.next[column])
    }

    /// Advance `column` by one row. Pushing past the top row sets the full
    /// flag, which stays set until [`ColumnHeights::reset`].
    pub fn record_placement(&mut self, column: usize) {
        if column >= COLS || self.full[column] {
            return;
        }
        self.next[column] += COLS;
        if self.next[column] >= CELLS {
            self.full[column] = true;
        }
    }

    /// Out-of-range columns report as full.
    #[inline]
    pub fn is_full(&self, column: usize) -> bool {
        column >= COLS || self.full[column]
    }

    /// Number of pieces already stacked in `column`.
    pub fn height(&self, column: usize) -> usize {
        if column >= COLS {
            return 0;
        }
        self.next[column] / COLS
    }

    /// Zero-based indices of columns that still accept a piece.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&c| !self.is_full(c))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ColumnHeights {
    fn default() -> Self {
        Self::new()
    }
}
