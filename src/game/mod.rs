//! Core Connect Four game logic: board representation, player types, and
//! immutable game states with win/loss/draw detection.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};

/// Legal columns in ascending order.
pub type LegalActions = Vec<usize>;
