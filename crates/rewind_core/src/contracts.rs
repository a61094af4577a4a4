//! Contract-based validation for moves on the history store.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::MoveError;
use crate::history::GameHistory;
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::position::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the board at the step pointer must not be won yet.
pub struct NotWon;

impl NotWon {
    /// Rejects moves on a won board.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), MoveError> {
        if history.outcome().is_win() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square must be empty on the current board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves on an occupied square.
    #[instrument(skip(history))]
    pub fn check(pos: Position, history: &GameHistory) -> Result<(), MoveError> {
        if history.current_snapshot().board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a mark from the current step.
///
/// Preconditions:
/// - Current board is not won
/// - Square is empty
///
/// Postconditions (debug builds):
/// - History grew by exactly one snapshot past the old step
/// - Every snapshot adds one mark to its predecessor
/// - Marks alternate starting with X
/// - Step pointer is in range
pub struct PlayContract;

impl Contract<GameHistory, Position> for PlayContract {
    fn pre(history: &GameHistory, pos: &Position) -> Result<(), MoveError> {
        NotWon::check(history)?;
        SquareIsEmpty::check(*pos, history)?;
        Ok(())
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        if after.len() != before.step() + 2 || after.step() != after.len() - 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} snapshots with step at the end, found {} at step {}",
                before.step() + 2,
                after.len(),
                after.step()
            )));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
