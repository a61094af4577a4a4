//! Step pointer invariant: the pointer names a recorded snapshot.

use super::Invariant;
use crate::history::GameHistory;
use crate::snapshot::Snapshot;

/// Invariant: history starts with the empty snapshot and the step pointer
/// lies in `[0, len - 1]`.
pub struct StepInBoundsInvariant;

impl Invariant<GameHistory> for StepInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().first() == Some(&Snapshot::initial())
            && history.step() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "History starts empty and the step pointer is in range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_holds() {
        assert!(StepInBoundsInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_jumped_history_holds() {
        let mut history = GameHistory::new();
        history.play_move(0);
        history.play_move(1);
        history.jump_to(0);
        assert!(StepInBoundsInvariant::holds(&history));
    }

    #[test]
    fn test_dangling_step_violates() {
        let mut history = GameHistory::new();
        history.step = 1;
        assert!(!StepInBoundsInvariant::holds(&history));
    }

    #[test]
    fn test_missing_initial_snapshot_violates() {
        let mut history = GameHistory::new();
        history.play_move(4);
        history.snapshots.remove(0);
        history.step = 0;
        assert!(!StepInBoundsInvariant::holds(&history));
    }
}
