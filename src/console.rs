#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use log::debug;

use crate::{
    common::{GameStatus, MoveError, Player},
    config::{COLS, ROWS},
    game::GameEngine,
    heights::ColumnHeights,
    session::Scoreboard,
    terminal::Terminal,
};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const REPLAY_PROMPT: &str = "Would you like to play again? : 'Y': Yes 'N': No :: ";

/// Outcome of reading one line at the column prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnInput {
    /// Zero-based column that can take a piece.
    Valid(usize),
    NotANumber,
    OutOfRange,
    /// One-based column number the player typed.
    Full(usize),
}

/// Classify a line typed at the column prompt. Players type 1-based columns.
pub fn parse_column(input: &str, heights: &ColumnHeights) -> ColumnInput {
    let trimmed = input.trim();
    let number: i64 = match trimmed.parse() {
        Ok(n) => n,
        Err(_) if is_integer_literal(trimmed) => return ColumnInput::OutOfRange,
        Err(_) => return ColumnInput::NotANumber,
    };
    if number < 1 || number > COLS as i64 {
        return ColumnInput::OutOfRange;
    }
    let column = (number - 1) as usize;
    if heights.is_full(column) {
        ColumnInput::Full(number as usize)
    } else {
        ColumnInput::Valid(column)
    }
}

/// Optional sign followed by at least one ASCII digit, whatever its magnitude.
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a replay answer: `Y`/`y` or `N`/`n`, nothing else.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim() {
        "Y" | "y" => Some(true),
        "N" | "n" => Some(false),
        _ => None,
    }
}

/// Line-oriented text terminal over any reader and writer.
pub struct ConsoleTerminal<R, W> {
    input: R,
    output: W,
}

impl ConsoleTerminal<StdinLock<'static>, Stdout> {
    /// Terminal bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text`, flush, and read one line. End of input is reported as
    /// `UnexpectedEof`. Bytes that are not UTF-8 are replaced, so the line is
    /// rejected by the parsers instead of failing the read.
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    fn write_board(&mut self, engine: &GameEngine) -> io::Result<()> {
        writeln!(self.output)?;
        let header: Vec<String> = (1..=COLS).map(|c| c.to_string()).collect();
        writeln!(self.output, "{}", header.join(" "))?;
        let board = engine.board();
        for row in (0..ROWS).rev() {
            let cells: Vec<String> = (0..COLS)
                .map(|col| match board.cell(row, col) {
                    Some(p) => p.symbol().to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(self.output, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    type Error = io::Error;

    fn read_column_choice(&mut self, player: Player, heights: &ColumnHeights) -> io::Result<usize> {
        writeln!(self.output)?;
        let prompt = format!("Player::{}::Enter column::", player);
        loop {
            let line = self.prompt(&prompt)?;
            let message = match parse_column(&line, heights) {
                ColumnInput::Valid(column) => {
                    writeln!(self.output)?;
                    return Ok(column);
                }
                ColumnInput::NotANumber => "Error::Please enter an integer value...".to_string(),
                ColumnInput::OutOfRange => {
                    format!("Error::Please enter column within the range of 1-{}...", COLS)
                }
                ColumnInput::Full(number) => format!(
                    "Error::Column {} is full. Please select some other column...",
                    number
                ),
            };
            debug!("rejected column input {:?} from player {}", line.trim(), player);
            writeln!(self.output, "{}", message)?;
            writeln!(self.output)?;
        }
    }

    fn read_yes_no(&mut self) -> io::Result<bool> {
        let mut text = format!("\n{}", REPLAY_PROMPT);
        loop {
            let line = self.prompt(&text)?;
            if let Some(answer) = parse_yes_no(&line) {
                return Ok(answer);
            }
            writeln!(self.output, "Error::Please enter Y or N...")?;
            text = REPLAY_PROMPT.to_string();
        }
    }

    fn render_board(&mut self, engine: &GameEngine) -> io::Result<()> {
        self.write_board(engine)
    }

    fn render_result(&mut self, engine: &GameEngine, scores: &Scoreboard) -> io::Result<()> {
        match engine.status() {
            GameStatus::Won(player) => writeln!(self.output, "Winner::{}", player)?,
            GameStatus::Draw => writeln!(self.output, "GAME OVER:: Grid is full...")?,
            GameStatus::InProgress => return Ok(()),
        }
        writeln!(self.output, "\nThe final board is::")?;
        self.write_board(engine)?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Score::{} {} - {} {} - Draws {}",
            Player::A,
            scores.a_wins,
            Player::B,
            scores.b_wins,
            scores.draws
        )
    }

    fn reject_move(&mut self, error: &MoveError) -> io::Result<()> {
        writeln!(self.output, "Error::{}...", error)
    }

    fn clear(&mut self) -> io::Result<()> {
        write!(self.output, "{}", CLEAR_SCREEN)?;
        self.output.flush()
    }

    fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Connect-4...")
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nThank you for playing...\n")?;
        self.output.flush()
    }
}
