//! Full-board detection for tic-tac-toe.

use super::win::evaluate;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
///
/// The history store never reports this as a status of its own; the
/// presentation layer uses it to annotate the "next to move" line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !evaluate(board).is_win()
}
