#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use connect_four::{init_logging, ConsoleTerminal, FirstPlayer, GameConfig, GameSession};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::{info, warn};

/// Two-player Connect-4 on a 6-column, 7-row grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Who opens each round.
    #[arg(long, value_enum, default_value_t = FirstPlayer::A)]
    first_player: FirstPlayer,
    #[arg(long, help = "Fix RNG seed for reproducible random openers (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = GameConfig {
        first_player: cli.first_player,
        seed: cli.seed,
    };

    let mut session = GameSession::new(ConsoleTerminal::stdio(), config);
    match session.run() {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            info!("input closed, leaving the game");
            println!("\nThank you for playing...\n");
            Ok(())
        }
        Err(e) => {
            warn!("console error, leaving the game: {}", e);
            println!("\nThank you for playing...\n");
            Ok(())
        }
    }
}
