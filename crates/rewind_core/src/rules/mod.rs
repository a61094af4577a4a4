//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Rules are separated from history
//! storage so the store can re-derive legality from any snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, evaluate};
