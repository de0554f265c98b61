//! Outcome evaluation: a pure function of the board.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{line_sums, winner, LINES};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// Win is checked before draw, so a full board that also contains a
/// winning line reports the win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        Outcome::Won(player)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Player, Position, Square};
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_takes_precedence_over_draw() {
        // Full board whose top row is all noughts.
        let marks = [1, 1, 1, -1, -1, 1, -1, 1, -1];
        let mut board = Board::new();
        for (i, mark) in marks.iter().enumerate() {
            let square = if *mark == 1 {
                Square::Occupied(Player::Nought)
            } else {
                Square::Occupied(Player::Cross)
            };
            board.set(Position::from_index(i).unwrap(), square);
        }
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Won(Player::Nought));
    }
}
