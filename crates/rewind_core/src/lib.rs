//! Tic-tac-toe game state with time-travel history.
//!
//! The crate has no I/O. A presentation layer reads a [`GameHistory`] and
//! forwards player intents to it:
//!
//! - [`rules::evaluate`] finds a completed line on any board
//! - [`GameHistory`] owns the snapshots and the step pointer
//! - [`MoveListOrder`] and [`GameView`] give a read-only rendering of both
//!
//! # Example
//!
//! ```
//! use rewind_core::{GameHistory, Player, Status};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     game.play_move(cell);
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//!
//! // Travel back before the win; moves are legal again from there.
//! game.jump_to(2);
//! assert!(game.play_move(8));
//! assert_eq!(game.snapshots().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod history;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod snapshot;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use history::GameHistory;
pub use phases::{Outcome, Phase, Status};
pub use position::Position;
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry, MoveListOrder};
