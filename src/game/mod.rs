//! Tic-tac-toe: board, cells, move acceptance, outcome evaluation.

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{Game, MoveError};
pub use position::Position;
pub use types::{Board, Outcome, Player, Square};
