#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use resolver::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod resolver;
mod types;

/// Board height in rows; row 0 is the top row.
pub const ROWS: Coord = 6;
/// Board width in columns.
pub const COLS: Coord = 7;
/// Length of a winning run.
pub const CONNECT: Coord = 4;
/// Columns in one player's turn submission.
pub const MOVES_PER_TURN: usize = 3;
