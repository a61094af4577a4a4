//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::history::GameHistory;
use crate::types::Player;

/// Invariant: the mark placed on move `n` (0-indexed) is X iff `n` is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .iter()
            .skip(1)
            .enumerate()
            .all(|(n, snapshot)| {
                snapshot
                    .producing_move()
                    .is_some_and(|mov| mov.player == Player::for_step(n))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
