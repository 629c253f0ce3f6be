//! Packed occupancy of the Connect-4 grid, one bitboard per player plus the
//! combined layer.

use crate::bitboard::BitBoardError;
use crate::common::{Cell, Player};
use crate::config::{Grid, CELLS};
use core::fmt;

const COMBINED: usize = 2;

/// Occupancy bitboards for both players and their union.
///
/// After every [`BitboardState::place`] the combined layer equals
/// `A | B` and the two player layers are disjoint.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct BitboardState {
    occupied: [Grid; 3],
}

impl BitboardState {
    /// Create an empty board.
    pub fn new() -> Self {
        BitboardState {
            occupied: [Grid::new(); 3],
        }
    }

    /// Set the bit for `cell` in `player`'s layer and refresh the combined layer.
    ///
    /// The caller guarantees the cell is free; only an off-board cell is an
    /// error here.
    pub fn place(&mut self, player: Player, cell: Cell) -> Result<(), BitBoardError> {
        debug_assert!(
            !self.combined().get(cell.row, cell.col).unwrap_or(false),
            "cell {:?} already occupied",
            cell
        );
        self.occupied[player.layer()].set(cell.row, cell.col)?;
        self.occupied[COMBINED] =
            self.occupied[Player::A.layer()] | self.occupied[Player::B.layer()];
        Ok(())
    }

    /// `true` once every cell holds a piece.
    pub fn is_full(&self) -> bool {
        self.occupied[COMBINED].count_ones() == CELLS
    }

    /// Clear all three layers.
    pub fn reset(&mut self) {
        for layer in self.occupied.iter_mut() {
            layer.clear_all();
        }
    }

    /// Layer of cells owned by `player`.
    #[inline]
    pub fn player(&self, player: Player) -> Grid {
        self.occupied[player.layer()]
    }

    /// Layer of all occupied cells.
    #[inline]
    pub fn combined(&self) -> Grid {
        self.occupied[COMBINED]
    }

    /// Owner of the piece at `(row, col)`, if any.
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        let cell = Cell::new(row, col);
        if !cell.is_on_board() {
            return None;
        }
        let idx = cell.index();
        if self.player(Player::A).get_index(idx) {
            Some(Player::A)
        } else if self.player(Player::B).get_index(idx) {
            Some(Player::B)
        } else {
            None
        }
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.occupied[COMBINED].count_ones()
    }
}

impl fmt::Debug for BitboardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BitboardState {{\n  a: {:?},\n  b: {:?},\n  combined: {:?}\n}}",
            self.occupied[0], self.occupied[1], self.occupied[COMBINED]
        )
    }
}
