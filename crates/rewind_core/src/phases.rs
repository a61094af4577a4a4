//! Outcome, phase and status values derived from a board.
//!
//! None of these are stored. They are recomputed from the snapshot at the
//! step pointer every time they are asked for.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board for a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No three-in-a-row; the board may or may not be full.
    NoResult,
    /// `mark` holds every cell of `line`.
    Win {
        /// The winning mark.
        mark: Player,
        /// The exact ordered triple of cells that matched.
        line: [Position; 3],
    },
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            Outcome::NoResult => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::NoResult => None,
        }
    }

    /// Returns true if a line was completed.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win { .. })
    }
}

/// Logical phase of the game at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// The current board holds a winning line; moves are ignored.
    Won(Player),
}

impl From<Outcome> for Phase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win { mark, .. } => Phase::Won(mark),
            Outcome::NoResult => Phase::InProgress,
        }
    }
}

/// Status line shown to players.
///
/// There is no draw variant: a full board without a winner keeps reporting
/// the mark whose turn it would be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The current board is won.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Nobody has won yet at the current step.
    #[display("Next player: {}", _0)]
    NextToMove(Player),
}
