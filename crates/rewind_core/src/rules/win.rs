//! Win detection logic for tic-tac-toe.

use crate::phases::Outcome;
use crate::position::Position;
use crate::types::{Board, Square};
use tracing::instrument;

/// The 8 winning lines in evaluation order: rows top-to-bottom,
/// columns left-to-right, then the two diagonals.
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

/// Evaluates a board for three matching marks in a line.
///
/// Returns the first completed line in [`LINES`] order, so a contrived board
/// with several complete lines always reports the same one.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == Square::Occupied(mark)
            && board.get(c) == Square::Occupied(mark)
        {
            return Outcome::Win { mark, line };
        }
    }

    Outcome::NoResult
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn board_from(cells: &str) -> Board {
        let mut board = Board::new();
        for (pos, ch) in Position::ALL.iter().zip(cells.chars()) {
            match ch {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), Outcome::NoResult);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from("XXX......");
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from("..O.O.O..");
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: Player::O,
                line: [Position::TopRight, Position::Center, Position::BottomLeft],
            }
        );
    }

    #[test]
    fn test_no_winner_mixed_line() {
        assert_eq!(evaluate(&board_from("XXO......")), Outcome::NoResult);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Player::O));
            }
            assert_eq!(evaluate(&board).line(), Some(line));
        }
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete: the row comes first.
        let board = board_from("XXXX..X..");
        assert_eq!(
            evaluate(&board).line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );

        // Middle column and main diagonal: the column comes first.
        let board = board_from("OO..O..OO");
        assert_eq!(
            evaluate(&board).line(),
            Some([Position::TopCenter, Position::Center, Position::BottomCenter])
        );
    }

    #[test]
    fn test_full_board_without_line() {
        assert_eq!(evaluate(&board_from("XOXXOOOXX")), Outcome::NoResult);
    }
}
