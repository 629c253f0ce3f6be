use std::collections::VecDeque;

use connect_four::{
    ColumnHeights, FirstPlayer, GameConfig, GameEngine, GameSession, GameStatus, MoveError,
    Player, Scoreboard, Terminal,
};

/// Terminal that replays scripted columns, then falls back to column 0 for A
/// and column 1 for B so whoever opens wins in seven moves.
#[derive(Default)]
struct ScriptedTerminal {
    columns: VecDeque<usize>,
    answers: VecDeque<bool>,
    asked: Vec<Player>,
    rejected: Vec<MoveError>,
    results: Vec<GameStatus>,
    boards_rendered: usize,
    clears: usize,
}

impl ScriptedTerminal {
    fn new(columns: &[usize], answers: &[bool]) -> Self {
        Self {
            columns: columns.iter().copied().collect(),
            answers: answers.iter().copied().collect(),
            ..Default::default()
        }
    }

    /// First player asked for a column in each round.
    fn openers(&self, engine_moves: &[usize]) -> Vec<Player> {
        let mut openers = Vec::new();
        let mut idx = 0;
        for &moves in engine_moves {
            openers.push(self.asked[idx]);
            idx += moves;
        }
        openers
    }
}

impl Terminal for ScriptedTerminal {
    type Error = &'static str;

    fn read_column_choice(
        &mut self,
        player: Player,
        _heights: &ColumnHeights,
    ) -> Result<usize, Self::Error> {
        self.asked.push(player);
        Ok(self.columns.pop_front().unwrap_or(match player {
            Player::A => 0,
            Player::B => 1,
        }))
    }

    fn read_yes_no(&mut self) -> Result<bool, Self::Error> {
        self.answers.pop_front().ok_or("out of answers")
    }

    fn render_board(&mut self, _engine: &GameEngine) -> Result<(), Self::Error> {
        self.boards_rendered += 1;
        Ok(())
    }

    fn render_result(
        &mut self,
        engine: &GameEngine,
        _scores: &Scoreboard,
    ) -> Result<(), Self::Error> {
        self.results.push(engine.status());
        Ok(())
    }

    fn reject_move(&mut self, error: &MoveError) -> Result<(), Self::Error> {
        self.rejected.push(error.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.clears += 1;
        Ok(())
    }
}

fn config(first_player: FirstPlayer, seed: Option<u64>) -> GameConfig {
    GameConfig { first_player, seed }
}

#[test]
fn test_single_round_then_quit() {
    let term = ScriptedTerminal::new(&[], &[false]);
    let mut session = GameSession::new(term, config(FirstPlayer::A, None));
    let scores = session.run().unwrap();
    assert_eq!(scores, Scoreboard { a_wins: 1, b_wins: 0, draws: 0 });

    let term = session.into_terminal();
    assert_eq!(term.results, vec![GameStatus::Won(Player::A)]);
    // initial board plus one per non-final move
    assert_eq!(term.boards_rendered, 7);
    assert_eq!(term.clears, 0);
}

#[test]
fn test_rejected_move_is_reprompted() {
    // Column 0 filled by seven alternating moves, B then retries column 0.
    let script = [0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 2, 1, 2, 1];
    let term = ScriptedTerminal::new(&script, &[false]);
    let mut session = GameSession::new(term, config(FirstPlayer::A, None));
    session.run().unwrap();

    assert_eq!(session.engine().status(), GameStatus::Won(Player::B));
    let term = session.into_terminal();
    assert_eq!(term.rejected, vec![MoveError::ColumnFull(0)]);
    assert_eq!(term.asked[7], Player::B);
    assert_eq!(term.asked[8], Player::B);
}

#[test]
fn test_same_player_opens_every_round_by_default() {
    let term = ScriptedTerminal::new(&[], &[true, true, false]);
    let mut session = GameSession::new(term, GameConfig::default());
    let scores = session.run().unwrap();
    assert_eq!(scores.wins(Player::A), 3);
    assert_eq!(scores.rounds(), 3);

    let term = session.into_terminal();
    assert_eq!(term.openers(&[7, 7, 7]), vec![Player::A; 3]);
    assert_eq!(term.clears, 2);
}

#[test]
fn test_b_opens_when_configured() {
    let term = ScriptedTerminal::new(&[], &[false]);
    let mut session = GameSession::new(term, config(FirstPlayer::B, None));
    session.run().unwrap();
    assert_eq!(session.scores().wins(Player::B), 1);
}

#[test]
fn test_alternating_openers() {
    let term = ScriptedTerminal::new(&[], &[true, true, false]);
    let mut session = GameSession::new(term, config(FirstPlayer::Alternate, None));
    let scores = session.run().unwrap();
    assert_eq!(scores, Scoreboard { a_wins: 2, b_wins: 1, draws: 0 });

    let term = session.into_terminal();
    assert_eq!(
        term.openers(&[7, 7, 7]),
        vec![Player::A, Player::B, Player::A]
    );
}

#[test]
fn test_seeded_random_openers_are_reproducible() {
    let run = |seed| {
        let term = ScriptedTerminal::new(&[], &[true, true, true, true, true, false]);
        let mut session = GameSession::new(term, config(FirstPlayer::Random, Some(seed)));
        let scores = session.run().unwrap();
        assert_eq!(scores.rounds(), 6);
        session.into_terminal().openers(&[7; 6])
    };
    assert_eq!(run(12345), run(12345));
}

#[test]
fn test_terminal_error_stops_session() {
    let term = ScriptedTerminal::new(&[], &[]);
    let mut session = GameSession::new(term, GameConfig::default());
    assert_eq!(session.run().unwrap_err(), "out of answers");
    assert_eq!(session.scores().rounds(), 1);
}

#[test]
fn test_draw_is_counted() {
    let draw = [
        0, 0, 0, 0, 0, 0, 0, 3, 1, 1, 1, 1, 1, 1, 1, 4, 2, 2, 2, 2, 2, 2, 2, 5, 3, 3, 3, 3, 3, 3,
        4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5,
    ];
    let term = ScriptedTerminal::new(&draw, &[false]);
    let mut session = GameSession::new(term, GameConfig::default());
    let scores = session.run().unwrap();
    assert_eq!(scores.draws, 1);
    assert_eq!(session.terminal().results, vec![GameStatus::Draw]);
}
