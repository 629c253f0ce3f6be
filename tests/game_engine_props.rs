use connect_four::{GameEngine, GameStatus, MoveError, Player, COLS};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Layers stay disjoint and the combined layer stays their union for any
    /// sequence of column picks, legal or not.
    #[test]
    fn occupancy_invariants_hold(columns in prop::collection::vec(0..COLS + 1, 0..80)) {
        let mut engine = GameEngine::new();
        for col in columns {
            let player = engine.current_player();
            let before = engine.clone();
            match engine.apply_move(player, col) {
                Ok(_) => {
                    prop_assert_eq!(engine.moves_played(), before.moves_played() + 1);
                }
                Err(err) => {
                    prop_assert!(matches!(
                        err,
                        MoveError::GameOver | MoveError::ColumnFull(_) | MoveError::ColumnOutOfRange(_)
                    ));
                    prop_assert_eq!(engine.board(), before.board());
                    prop_assert_eq!(engine.heights(), before.heights());
                    prop_assert_eq!(engine.current_player(), before.current_player());
                }
            }

            let a = engine.board().player(Player::A);
            let b = engine.board().player(Player::B);
            prop_assert!((a & b).is_empty());
            prop_assert_eq!(engine.board().combined(), a | b);
            prop_assert_eq!(engine.board().piece_count(), engine.moves_played());
            let stacked: usize = (0..COLS).map(|c| engine.heights().height(c)).sum();
            prop_assert_eq!(stacked, engine.moves_played());
        }
    }

    /// Once a game is decided nothing else changes until reset.
    #[test]
    fn terminal_state_is_final(columns in prop::collection::vec(0..COLS, 0..120)) {
        let mut engine = GameEngine::new();
        let mut decided: Option<GameStatus> = None;
        for col in columns {
            let player = engine.current_player();
            let res = engine.apply_move(player, col);
            if let Some(status) = decided {
                prop_assert_eq!(res, Err(MoveError::GameOver));
                prop_assert_eq!(engine.status(), status);
            } else if let Ok(status) = res {
                if status.is_terminal() {
                    decided = Some(status);
                }
            }
        }

        engine.reset();
        prop_assert_eq!(engine.status(), GameStatus::InProgress);
        prop_assert!(engine.board().combined().is_empty());
        prop_assert_eq!(engine.heights().open_columns().count(), COLS);
    }

    /// A win is only ever declared for the player who just moved.
    #[test]
    fn winner_made_the_last_move(columns in prop::collection::vec(0..COLS, 0..120)) {
        let mut engine = GameEngine::new();
        for col in columns {
            let player = engine.current_player();
            if let Ok(GameStatus::Won(winner)) = engine.apply_move(player, col) {
                prop_assert_eq!(winner, player);
                prop_assert_eq!(engine.last_move().map(|m| m.player), Some(player));
                prop_assert!(engine.winning_line().is_some());
            }
        }
    }
}
