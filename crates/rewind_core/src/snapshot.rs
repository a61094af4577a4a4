//! Immutable board snapshots stored in the history.

use crate::action::Move;
use crate::position::Position;
use crate::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One board state plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Cell the producing move was played on; `None` for the game start.
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty snapshot every history begins with.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Snapshot that follows `self` after `mov`.
    ///
    /// Legality is the caller's concern; this only builds the new board.
    pub(crate) fn after(&self, mov: Move) -> Self {
        Self {
            board: self.board.with_mark(mov.position, mov.player),
            last_move: Some(mov.position),
        }
    }

    /// The move that produced this snapshot, recovered from the board.
    pub fn producing_move(&self) -> Option<Move> {
        let position = self.last_move?;
        let player = self.board.get(position).player()?;
        Some(Move::new(player, position))
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, last_move: Option<Position>) -> Self {
        Self { board, last_move }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_initial_is_empty() {
        let snap = Snapshot::initial();
        assert_eq!(snap.board(), &Board::new());
        assert_eq!(snap.last_move(), &None);
        assert_eq!(snap.producing_move(), None);
    }

    #[test]
    fn test_after_records_move() {
        let mov = Move::new(Player::X, Position::MiddleRight);
        let snap = Snapshot::initial().after(mov);
        assert_eq!(snap.last_move(), &Some(Position::MiddleRight));
        assert_eq!(snap.producing_move(), Some(mov));
    }
}
