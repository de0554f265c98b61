//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Nought (`O`, moves first).
    Nought,
    /// Cross (`X`, moves second).
    Cross,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Nought => Player::Cross,
            Player::Cross => Player::Nought,
        }
    }

    /// Mark value used by the line-sum evaluator: `+1` for nought,
    /// `-1` for cross.
    pub fn mark(self) -> i8 {
        match self {
            Player::Nought => 1,
            Player::Cross => -1,
        }
    }

    /// Symbol drawn on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::Nought => 'O',
            Player::Cross => 'X',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Mark value of the square: `0` when empty, otherwise the
    /// occupying player's mark.
    pub fn mark(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(player) => player.mark(),
        }
    }
}

/// 3x3 tic-tac-toe board, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Square at the given cell.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Writes a square at the given cell.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Whether the cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Clears every cell.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable grid for logs and tests.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => '.',
                    Square::Occupied(player) => player.symbol(),
                };
                out.push(symbol);
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a game, derived from the board alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A player has three in a line.
    Won(Player),
    /// Board is full with no winning line.
    Draw,
}

impl Outcome {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}
