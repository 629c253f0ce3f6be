//! Four-in-a-row detection by shift-and-intersect over a single player's
//! bitboard.
//!
//! For a direction with index step `s`, `b & (b >> s)` keeps every cell whose
//! neighbour `s` cells further on is also set. Intersecting that run with
//! itself shifted by `2s` leaves exactly the cells that start four consecutive
//! pieces. Raw index arithmetic would also chain cells across the end of a
//! row (column 5 of one row is index-adjacent to column 0 of the next), so each
//! direction is restricted to the start cells whose whole line stays on the
//! board.

use crate::common::Cell;
use crate::config::{Grid, COLS, ROWS, WIN_LENGTH};

/// Line orientations, named by how a line grows from its lowest-index cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same row, next column. Step 1.
    Horizontal,
    /// Same column, next row up. Step `COLS`.
    Vertical,
    /// Next row up, previous column. Step `COLS - 1`.
    DiagonalUpLeft,
    /// Next row up, next column. Step `COLS + 1`.
    DiagonalUpRight,
}

const fn line_starts(dr: isize, dc: isize) -> u64 {
    let reach = WIN_LENGTH as isize - 1;
    let mut mask = 0u64;
    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col < COLS {
            let end_row = row as isize + dr * reach;
            let end_col = col as isize + dc * reach;
            if end_row >= 0 && end_row < ROWS as isize && end_col >= 0 && end_col < COLS as isize {
                mask |= 1u64 << (row * COLS + col);
            }
            col += 1;
        }
        row += 1;
    }
    mask
}

const HORIZONTAL_STARTS: u64 = line_starts(0, 1);
const VERTICAL_STARTS: u64 = line_starts(1, 0);
const UP_LEFT_STARTS: u64 = line_starts(1, -1);
const UP_RIGHT_STARTS: u64 = line_starts(1, 1);

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUpLeft,
        Direction::DiagonalUpRight,
    ];

    /// Distance in bit indices between neighbouring cells on a line.
    pub const fn step(self) -> usize {
        match self {
            Direction::Horizontal => 1,
            Direction::Vertical => COLS,
            Direction::DiagonalUpLeft => COLS - 1,
            Direction::DiagonalUpRight => COLS + 1,
        }
    }

    /// Cells from which a full line in this direction stays on the board.
    pub fn start_mask(self) -> Grid {
        let raw = match self {
            Direction::Horizontal => HORIZONTAL_STARTS,
            Direction::Vertical => VERTICAL_STARTS,
            Direction::DiagonalUpLeft => UP_LEFT_STARTS,
            Direction::DiagonalUpRight => UP_RIGHT_STARTS,
        };
        Grid::from_raw(raw)
    }
}

/// Four connected pieces: the lowest-index cell and the direction they run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub direction: Direction,
    pub start: Cell,
}

impl WinningLine {
    /// The four cells of the line, in increasing index order.
    pub fn cells(&self) -> [Cell; WIN_LENGTH] {
        let step = self.direction.step();
        let base = self.start.index();
        core::array::from_fn(|k| {
            let idx = base + k * step;
            Cell::new(idx / COLS, idx % COLS)
        })
    }
}

/// Locate a four-in-a-row in `board`, checking horizontal, vertical and then
/// both diagonals.
pub fn find_four(board: Grid) -> Option<WinningLine> {
    Direction::ALL.into_iter().find_map(|direction| {
        let step = direction.step();
        let pairs = board & board.shr(step);
        let run = pairs & pairs.shr(2 * step) & direction.start_mask();
        run.iter_set_bits()
            .next()
            .map(|(row, col)| WinningLine {
                direction,
                start: Cell::new(row, col),
            })
    })
}

/// `true` if `board` holds four consecutive pieces in any direction.
#[inline]
pub fn has_four_in_a_row(board: Grid) -> bool {
    find_four(board).is_some()
}
