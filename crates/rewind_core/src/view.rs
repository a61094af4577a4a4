//! Read-only views over the history for presentation layers.
//!
//! Display order of the move list is a property of the view, never of the
//! history: reversing the list does not touch the snapshots the store will
//! later truncate.

use crate::history::GameHistory;
use crate::phases::Status;
use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveListOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveListOrder {
    /// The other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// Mark placed by the move, `None` for the game start.
    pub player: Option<Player>,
    /// Cell of the move, `None` for the game start.
    pub last_move: Option<Position>,
    /// Whether this is the step currently shown.
    pub is_current: bool,
}

impl MoveEntry {
    /// Button text for this entry.
    pub fn description(&self) -> String {
        match self.last_move {
            Some(pos) if self.step > 0 => {
                format!("Go to move #{} ({})", self.step, pos.coordinates())
            }
            _ => "Go to game start".to_string(),
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

impl GameHistory {
    /// Lazily lists every recorded step in the requested order.
    pub fn move_list(&self, order: MoveListOrder) -> impl Iterator<Item = MoveEntry> + '_ {
        let len = self.len();
        let current = self.step();
        (0..len)
            .map(move |i| match order {
                MoveListOrder::Ascending => i,
                MoveListOrder::Descending => len - 1 - i,
            })
            .map(move |step| {
                let snapshot = &self.snapshots()[step];
                MoveEntry {
                    step,
                    player: snapshot.producing_move().map(|m| m.player),
                    last_move: *snapshot.last_move(),
                    is_current: step == current,
                }
            })
    }

    /// Bundles everything a presentation layer renders.
    #[instrument(skip(self))]
    pub fn view(&self, order: MoveListOrder) -> GameView {
        GameView {
            board: *self.current_snapshot().board(),
            status: self.status(),
            step: self.step(),
            winning_line: self.winning_line(),
            board_full: self.is_draw(),
            order,
            moves: self.move_list(order).collect(),
        }
    }
}

/// Serializable snapshot of what the presentation layer shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the step pointer.
    pub board: Board,
    /// Status line.
    pub status: Status,
    /// Step pointer.
    pub step: usize,
    /// Cells to highlight.
    pub winning_line: Option<[Position; 3]>,
    /// Full board without a winner.
    pub board_full: bool,
    /// Order of `moves`.
    pub order: MoveListOrder,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
}
