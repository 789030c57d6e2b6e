//! Core Connect Four game logic: the board with gravity and win detection,
//! the two sides, and the turn state machine.

mod board;
mod piece;
mod state;

pub use board::{Board, Cell, COLS, ROWS, WINDOW_LEN};
pub use piece::Piece;
pub use state::{Game, GameStatus};
