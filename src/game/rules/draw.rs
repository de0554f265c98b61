//! Draw detection.

use super::super::Board;

/// Whether every cell is occupied. A full board with no winning line
/// is a draw.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position, Square};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::Nought));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::Cross));
        }
        assert!(is_full(&board));
    }
}
