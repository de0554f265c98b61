//! Cursor movement for keyboard navigation.

use crate::game::Position;
use crossterm::event::KeyCode;

/// Moves the cursor one cell with the arrow keys (or `hjkl`),
/// clamping at the grid edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(2), col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}
