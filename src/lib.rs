#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod fleet;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod record;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use bitboard::{aliases, BitBoard, BitBoardError, Direction, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use record::{load_game, read_board, save_game, write_board, RecordError};
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
