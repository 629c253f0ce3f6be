#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod game;
mod heights;
#[cfg(feature = "std")]
mod logging;
mod session;
mod terminal;
pub mod win;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::*;
pub use game::*;
pub use heights::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use session::*;
pub use terminal::*;
pub use win::{find_four, has_four_in_a_row, Direction, WinningLine};
