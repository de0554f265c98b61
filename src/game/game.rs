//! Game engine: move acceptance, turn order, reset.

use super::rules;
use super::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error rejecting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell is already occupied.
    #[display("cell {_0} is already occupied")]
    Occupied(Position),

    /// The game has already ended.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// A tic-tac-toe game in play.
///
/// The board is fully determined by the sequence of accepted moves;
/// the outcome is recomputed from the board, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game: empty board, nought to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Nought,
            history: Vec::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Accepted moves, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Current outcome, evaluated fresh from the board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Plays the current player's mark at the given cell.
    ///
    /// On acceptance the mark is written, the move is recorded, and
    /// the turn flips exactly once; the freshly evaluated outcome is
    /// returned. A rejected move changes nothing.
    ///
    /// # Errors
    ///
    /// [`MoveError::Occupied`] if the cell is taken,
    /// [`MoveError::GameOver`] if the outcome is already terminal.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        self.to_move = self.to_move.opponent();

        let outcome = self.outcome();
        debug!(?outcome, "move accepted");
        Ok(outcome)
    }

    /// Resets to the starting state: all cells empty, nought to move,
    /// history cleared.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Player::Nought;
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nought_moves_first() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::Nought);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_accepted_move_flips_turn_once() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::Cross);
        assert_eq!(game.history(), [Position::Center]);
    }

    #[test]
    fn test_occupied_cell_rejected_without_state_change() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        let before = game.clone();

        let result = game.play(Position::Center);
        assert_eq!(result, Err(MoveError::Occupied(Position::Center)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = Game::new();
        // O: 0, 1, 2 wins; X: 3, 4.
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Won(Player::Nought));
        assert_eq!(
            game.play(Position::BottomLeft),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_reset_restores_starting_state() {
        let mut game = Game::new();
        game.play(Position::TopLeft).unwrap();
        game.play(Position::Center).unwrap();
        game.reset();
        assert_eq!(game, Game::new());
    }
}
