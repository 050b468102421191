#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod autoplay;
mod battle_log;
mod bitboard;
mod board;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
pub mod hotseat;
#[cfg(feature = "std")]
mod logging;
mod ship;
pub mod view;

pub use battle_log::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use hotseat::HotseatSession;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
pub use view::{BoardView, CellView};
