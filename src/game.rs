use log::{debug, info};

use crate::{
    board::BitboardState,
    common::{Cell, GameStatus, MoveError, Player},
    config::COLS,
    heights::ColumnHeights,
    win::{find_four, WinningLine},
};

/// A completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub player: Player,
    pub cell: Cell,
}

/// Core game logic: board occupancy, column counters and turn order.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: BitboardState,
    heights: ColumnHeights,
    current: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    last_move: Option<Move>,
    moves_played: usize,
}

impl GameEngine {
    /// Create an engine with an empty board where player A moves first.
    pub fn new() -> Self {
        Self::with_first_player(Player::A)
    }

    /// Create an engine with an empty board where `first` moves first.
    pub fn with_first_player(first: Player) -> Self {
        Self {
            board: BitboardState::new(),
            heights: ColumnHeights::new(),
            current: first,
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
            moves_played: 0,
        }
    }

    /// Occupancy bitboards.
    pub fn board(&self) -> &BitboardState {
        &self.board
    }

    /// Column slot counters.
    pub fn heights(&self) -> &ColumnHeights {
        &self.heights
    }

    /// Player whose turn it is. After a win this is the winner.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The four cells that decided the game, once somebody has won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Check that `player` may drop a piece into zero-based `column` right now.
    pub fn validate_move(&self, player: Player, column: usize) -> Result<Cell, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if player != self.current {
            return Err(MoveError::NotYourTurn {
                expected: self.current,
            });
        }
        if column >= COLS {
            return Err(MoveError::ColumnOutOfRange(column));
        }
        self.heights
            .next_slot(column)
            .ok_or(MoveError::ColumnFull(column))
    }

    /// Drop `player`'s piece into zero-based `column` and advance the state
    /// machine. A rejected move leaves the engine untouched.
    pub fn apply_move(&mut self, player: Player, column: usize) -> Result<GameStatus, MoveError> {
        let cell = self.validate_move(player, column)?;
        self.board.place(player, cell)?;
        self.heights.record_placement(column);
        self.moves_played += 1;
        self.last_move = Some(Move { player, cell });
        debug!(
            "player {} dropped into column {} -> row {} (move {})",
            player,
            column + 1,
            cell.row,
            self.moves_played
        );

        if let Some(line) = find_four(self.board.player(player)) {
            self.winning_line = Some(line);
            self.status = GameStatus::Won(player);
            info!(
                "player {} wins with a {:?} line from row {} column {}",
                player,
                line.direction,
                line.start.row,
                line.start.col + 1
            );
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("grid full after {} moves, game drawn", self.moves_played);
        } else {
            self.current = player.other();
        }
        Ok(self.status)
    }

    /// Start a fresh game with player A to move.
    pub fn reset(&mut self) {
        self.reset_with(Player::A);
    }

    /// Start a fresh game where `first` moves first.
    pub fn reset_with(&mut self, first: Player) {
        self.board.reset();
        self.heights.reset();
        self.current = first;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.last_move = None;
        self.moves_played = 0;
        debug!("board reset, player {} to move", first);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
