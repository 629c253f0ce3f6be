//! Common types for Connect-4: players, cells, game status and move errors.

use crate::bitboard::BitBoardError;
use crate::config::{CELLS, COLS, ROWS};

/// One of the two seats at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// The player who moves after `self`.
    #[inline]
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Glyph used when drawing the board.
    pub fn symbol(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'Y',
        }
    }

    /// Slot of this player's layer in the occupancy array.
    #[inline]
    pub(crate) fn layer(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A board position. Row 0 is the bottom row, column 0 the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Row-major bit index: `row * COLS + col`.
    #[inline]
    pub const fn index(self) -> usize {
        self.row * COLS + self.col
    }

    /// Inverse of [`Cell::index`]; `None` past the last cell.
    pub const fn from_index(index: usize) -> Option<Cell> {
        if index < CELLS {
            Some(Cell {
                row: index / COLS,
                col: index % COLS,
            })
        } else {
            None
        }
    }

    pub const fn is_on_board(self) -> bool {
        self.row < ROWS && self.col < COLS
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// `Won` and `Draw` accept no further moves.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Reasons the engine refuses a move. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game already reached `Won` or `Draw`.
    GameOver,
    /// It is the other player's turn.
    NotYourTurn { expected: Player },
    /// Zero-based column outside `0..COLS`.
    ColumnOutOfRange(usize),
    /// Column has no free slot left.
    ColumnFull(usize),
    /// Error returned by [`BitboardState::place`](crate::board::BitboardState::place)
    /// for an off-board cell. `validate_move` only yields on-board cells, so the
    /// engine never produces it after a successful validation.
    BitBoardError(BitBoardError),
}

impl From<BitBoardError> for MoveError {
    fn from(err: BitBoardError) -> Self {
        MoveError::BitBoardError(err)
    }
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "The game is already over"),
            MoveError::NotYourTurn { expected } => {
                write!(f, "It is player {}'s turn", expected)
            }
            MoveError::ColumnOutOfRange(col) => {
                write!(f, "Column {} is outside the range 1-{}", col.saturating_add(1), COLS)
            }
            MoveError::ColumnFull(col) => write!(f, "Column {} is full", col + 1),
            MoveError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
