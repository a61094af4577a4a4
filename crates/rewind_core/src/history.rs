//! Game history store with time-travel.
//!
//! The store owns the ordered snapshot sequence and the step pointer. It is
//! mutated only through [`GameHistory::new_game`], [`GameHistory::play_move`]
//! and [`GameHistory::jump_to`]; everything else (whose turn it is, whether
//! the game is won, the move list) is derived from the snapshot at the step
//! pointer on every call.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, PlayContract};
use crate::phases::{Outcome, Phase, Status};
use crate::position::Position;
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::Player;
use tracing::{debug, info, instrument};

/// Ordered board snapshots plus the pointer to the active one.
///
/// `snapshots` is never empty and always starts with the empty board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) step: usize,
}

impl GameHistory {
    /// Creates a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            step: 0,
        }
    }

    /// Discards the whole history and starts over from the empty board.
    #[instrument(skip(self), fields(discarded = self.snapshots.len()))]
    pub fn new_game(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(Snapshot::initial());
        self.step = 0;
        info!("New game started");
    }

    /// Plays the current mover's mark at `cell_index` (0-8).
    ///
    /// Illegal requests are ignored: a won board, an index off the board and
    /// an occupied cell all leave the history untouched. Returns whether the
    /// move was applied.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn play_move(&mut self, cell_index: usize) -> bool {
        let result = Position::from_index(cell_index)
            .ok_or(MoveError::OutOfBounds(cell_index))
            .and_then(|pos| self.try_play(pos).map(|_| ()));

        match result {
            Ok(()) => true,
            Err(error) => {
                debug!(%error, "Move ignored");
                false
            }
        }
    }

    /// Plays at `pos`, reporting why the move was rejected.
    ///
    /// Any snapshots after the step pointer are discarded before the new one
    /// is appended.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn try_play(&mut self, pos: Position) -> Result<&Snapshot, MoveError> {
        PlayContract::pre(self, &pos)?;

        let before = cfg!(debug_assertions).then(|| self.clone());

        let mov = Move::new(self.to_move(), pos);
        let next = self.current_snapshot().after(mov);

        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(next);
        self.step = self.snapshots.len() - 1;

        if let Some(before) = before
            && let Err(error) = PlayContract::post(&before, self)
        {
            *self = before;
            return Err(error);
        }

        debug!(%mov, step = self.step, "Move applied");
        if let Outcome::Win { mark, line } = self.outcome() {
            info!(winner = %mark, ?line, step = self.step, "Game won");
        }

        Ok(self.current_snapshot())
    }

    /// Moves the step pointer to `step` if it is a recorded step.
    ///
    /// History is never altered here; the discarded future is only dropped
    /// by the next [`play_move`](Self::play_move). Returns whether the
    /// pointer moved.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        match self.try_jump_to(step) {
            Ok(_) => true,
            Err(error) => {
                debug!(%error, "Jump ignored");
                false
            }
        }
    }

    /// Moves the step pointer, reporting an out-of-range target.
    pub fn try_jump_to(&mut self, step: usize) -> Result<&Snapshot, MoveError> {
        if step >= self.snapshots.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.snapshots.len(),
            });
        }
        self.step = step;
        Ok(self.current_snapshot())
    }

    /// The snapshot at the step pointer.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.step]
    }

    /// Winner at the current step, or whose turn it is.
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::Win { mark, .. } => Status::Winner(mark),
            Outcome::NoResult => Status::NextToMove(self.to_move()),
        }
    }

    /// Evaluation of the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.current_snapshot().board())
    }

    /// Phase at the current step.
    pub fn phase(&self) -> Phase {
        self.outcome().into()
    }

    /// Cells to highlight when the current board is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.outcome().line()
    }

    /// Mark placed by the next move, from step parity alone.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Board is full and nobody won, at the current step.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_snapshot().board())
    }

    /// All recorded snapshots, including any after the step pointer.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: a history always holds the initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Moves that produced each snapshot, in play order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.snapshots.iter().filter_map(Snapshot::producing_move)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn played(cells: &[usize]) -> GameHistory {
        let mut history = GameHistory::new();
        for &cell in cells {
            assert!(history.play_move(cell), "cell {cell} should be legal");
        }
        history
    }

    #[test]
    fn test_new_game_has_single_empty_snapshot() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.step(), 0);
        assert_eq!(history.current_snapshot(), &Snapshot::initial());
        assert_eq!(history.status(), Status::NextToMove(Player::X));
    }

    #[test]
    fn test_first_move_is_x() {
        let history = played(&[0]);
        assert_eq!(
            history.current_snapshot().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(history.status(), Status::NextToMove(Player::O));
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut history = played(&[4]);
        let before = history.clone();
        assert!(!history.play_move(4));
        assert_eq!(history, before);
        assert_eq!(
            history.try_play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut history = played(&[4]);
        let before = history.clone();
        assert!(!history.play_move(9));
        assert!(!history.play_move(usize::MAX));
        assert_eq!(history, before);
    }

    #[test]
    fn test_move_after_win_is_noop() {
        let mut history = played(&[0, 1, 4, 2, 8]);
        assert_eq!(history.phase(), Phase::Won(Player::X));
        assert_eq!(history.try_play(Position::MiddleRight), Err(MoveError::GameOver));
        assert_eq!(history.len(), 6);
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut history = played(&[0, 1]);
        assert!(!history.jump_to(3));
        assert_eq!(history.step(), 2);
        assert_eq!(
            history.try_jump_to(7),
            Err(MoveError::StepOutOfRange { step: 7, len: 3 })
        );
    }

    #[test]
    fn test_jump_does_not_truncate() {
        let mut history = played(&[0, 1, 2]);
        assert!(history.jump_to(1));
        assert_eq!(history.len(), 4);
        assert_eq!(history.to_move(), Player::O);
        assert!(history.jump_to(3));
        assert_eq!(history.current_snapshot(), &history.snapshots()[3]);
    }

    #[test]
    fn test_play_after_jump_truncates_future() {
        let mut history = played(&[0, 1, 2, 3]);
        history.jump_to(1);
        assert!(history.play_move(8));
        assert_eq!(history.len(), 3);
        assert_eq!(history.step(), 2);
        assert_eq!(history.current_snapshot().last_move(), &Some(Position::BottomRight));
        assert_eq!(
            history.current_snapshot().board().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_new_game_resets() {
        let mut history = played(&[0, 1, 2]);
        history.new_game();
        assert_eq!(history, GameHistory::new());
    }

    #[test]
    fn test_full_board_keeps_reporting_next_player() {
        // X O X / X O O / O X X, no line
        let history = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(history.is_draw());
        assert_eq!(history.outcome(), Outcome::NoResult);
        assert_eq!(history.status(), Status::NextToMove(Player::O));
    }

    #[test]
    fn test_moves_replay_in_order() {
        let history = played(&[4, 0]);
        let moves: Vec<_> = history.moves().collect();
        assert_eq!(
            moves,
            vec![
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::TopLeft),
            ]
        );
    }
}
