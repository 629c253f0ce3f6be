use crate::{
    common::{MoveError, Player},
    game::GameEngine,
    heights::ColumnHeights,
    session::Scoreboard,
};

/// Interface to whatever the players sit in front of.
///
/// A Terminal is responsible for:
/// - Asking the current player for a column, retrying until the answer names
///   an open column
/// - Asking whether to play another round
/// - Drawing the board and the final result
///
/// The game loop never retries input itself; it only calls
/// [`Terminal::reject_move`] if the engine still refuses a choice.
pub trait Terminal {
    type Error;

    /// Return the zero-based column `player` drops into. Implementations keep
    /// prompting until the choice is in range and `heights` reports it open.
    fn read_column_choice(
        &mut self,
        player: Player,
        heights: &ColumnHeights,
    ) -> Result<usize, Self::Error>;

    /// Ask whether to play again, prompting until a yes or no is given.
    fn read_yes_no(&mut self) -> Result<bool, Self::Error>;

    /// Draw the current board.
    fn render_board(&mut self, engine: &GameEngine) -> Result<(), Self::Error>;

    /// Announce the outcome and draw the final board.
    fn render_result(&mut self, engine: &GameEngine, scores: &Scoreboard)
        -> Result<(), Self::Error>;

    /// Tell the player the engine refused their move; a new choice follows.
    fn reject_move(&mut self, _error: &MoveError) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Wipe the display before a new round.
    fn clear(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn welcome(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn farewell(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
