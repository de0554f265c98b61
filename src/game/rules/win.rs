//! Win detection via line sums.
//!
//! Each mark carries a value (+1 for `O`, -1 for `X`); a line whose
//! marks sum to +3 or -3 is three in a row for that player.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Mark sums along each of the 8 lines, in [`LINES`] order.
pub fn line_sums(board: &Board) -> [i8; 8] {
    let mut sums = [0i8; 8];
    for (sum, line) in sums.iter_mut().zip(LINES) {
        *sum = line.iter().map(|&pos| board.get(pos).mark()).sum();
    }
    sums
}

/// Player with three in a line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let sums = line_sums(board);
    if sums.contains(&3) {
        Some(Player::Nought)
    } else if sums.contains(&-3) {
        Some(Player::Cross)
    } else {
        None
    }
}
