//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_core::Position;

/// Moves cursor based on arrow keys (or h/j/k/l); stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());

    let target = match key {
        KeyCode::Right | KeyCode::Char('l') => Position::from_coordinates(row, col + 1),
        KeyCode::Left | KeyCode::Char('h') => col
            .checked_sub(1)
            .and_then(|col| Position::from_coordinates(row, col)),
        KeyCode::Down | KeyCode::Char('j') => Position::from_coordinates(row + 1, col),
        KeyCode::Up | KeyCode::Char('k') => row
            .checked_sub(1)
            .and_then(|row| Position::from_coordinates(row, col)),
        _ => None,
    };

    target.unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Char('j')), Position::MiddleLeft);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }
}
