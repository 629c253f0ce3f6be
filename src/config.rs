use crate::bitboard::BitBoard;

pub const ROWS: usize = 7;
pub const COLS: usize = 6;
pub const CELLS: usize = ROWS * COLS;
pub const WIN_LENGTH: usize = 4;

/// Occupancy grid for a single layer of the board.
pub type Grid = BitBoard<u64, ROWS, COLS>;

/// Which player opens each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum FirstPlayer {
    /// Player A (`X`) always opens.
    #[default]
    A,
    /// Player B (`Y`) always opens.
    B,
    /// The opener swaps every round, starting with A.
    Alternate,
    /// The opener is drawn at random each round.
    Random,
}

/// Runtime settings for a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub first_player: FirstPlayer,
    /// Fixed RNG seed for [`FirstPlayer::Random`]; drawn from the OS when unset.
    pub seed: Option<u64>,
}
