//! Single-mark delta invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::history::GameHistory;

/// Invariant: `history[k]` is `history[k-1]` plus one mark on an empty cell.
///
/// The changed cell must be the one recorded as the snapshot's last move,
/// and marks already on the board never change.
pub struct SingleMarkDeltaInvariant;

impl Invariant<GameHistory> for SingleMarkDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(pos) = *next.last_move() else {
                return false;
            };

            prev.board().is_empty(pos)
                && !next.board().is_empty(pos)
                && prev.board().diff(next.board()) == [pos]
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark at its last move"
    }
}
