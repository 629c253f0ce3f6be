//! Round loop: drives a [`GameEngine`] through a [`Terminal`] until the
//! players decline a rematch.

use log::{debug, info, warn};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    common::{GameStatus, Player},
    config::{FirstPlayer, GameConfig},
    game::GameEngine,
    terminal::Terminal,
};

/// Results tallied across the rounds of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
}

impl Scoreboard {
    /// Count a finished round. `InProgress` is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::A) => self.a_wins += 1,
            GameStatus::Won(Player::B) => self.b_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::A => self.a_wins,
            Player::B => self.b_wins,
        }
    }

    pub fn rounds(&self) -> usize {
        self.a_wins + self.b_wins + self.draws
    }
}

pub struct GameSession<T: Terminal> {
    terminal: T,
    engine: GameEngine,
    scores: Scoreboard,
    first_player: FirstPlayer,
    rng: SmallRng,
    rounds_started: usize,
}

fn session_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        #[cfg(feature = "std")]
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
        #[cfg(not(feature = "std"))]
        None => SmallRng::seed_from_u64(0),
    }
}

impl<T: Terminal> GameSession<T> {
    pub fn new(terminal: T, config: GameConfig) -> Self {
        if let Some(s) = config.seed {
            debug!("session seeded with {}", s);
        }
        Self {
            terminal,
            engine: GameEngine::new(),
            scores: Scoreboard::default(),
            first_player: config.first_player,
            rng: session_rng(config.seed),
            rounds_started: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Give back the terminal, e.g. to inspect captured output.
    pub fn into_terminal(self) -> T {
        self.terminal
    }

    fn next_opener(&mut self) -> Player {
        match self.first_player {
            FirstPlayer::A => Player::A,
            FirstPlayer::B => Player::B,
            FirstPlayer::Alternate => {
                if self.rounds_started % 2 == 0 {
                    Player::A
                } else {
                    Player::B
                }
            }
            FirstPlayer::Random => {
                if self.rng.random() {
                    Player::A
                } else {
                    Player::B
                }
            }
        }
    }

    /// Play one game from an empty board to `Won` or `Draw`.
    pub fn play_round(&mut self) -> Result<GameStatus, T::Error> {
        let opener = self.next_opener();
        self.engine.reset_with(opener);
        self.rounds_started += 1;
        info!("round {} started, player {} opens", self.rounds_started, opener);

        self.terminal.render_board(&self.engine)?;
        loop {
            let player = self.engine.current_player();
            let column = self
                .terminal
                .read_column_choice(player, self.engine.heights())?;
            match self.engine.apply_move(player, column) {
                Ok(GameStatus::InProgress) => self.terminal.render_board(&self.engine)?,
                Ok(status) => {
                    self.scores.record(status);
                    self.terminal.render_result(&self.engine, &self.scores)?;
                    return Ok(status);
                }
                Err(err) => {
                    warn!("player {} move rejected: {}", player, err);
                    self.terminal.reject_move(&err)?;
                }
            }
        }
    }

    /// Play rounds until the replay prompt is answered with no.
    pub fn run(&mut self) -> Result<Scoreboard, T::Error> {
        self.terminal.welcome()?;
        loop {
            self.play_round()?;
            if !self.terminal.read_yes_no()? {
                break;
            }
            self.terminal.clear()?;
        }
        info!(
            "session over after {} rounds: A {} / B {} / draws {}",
            self.scores.rounds(),
            self.scores.a_wins,
            self.scores.b_wins,
            self.scores.draws
        );
        self.terminal.farewell()?;
        Ok(self.scores)
    }
}
