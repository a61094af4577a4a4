//! Headless game runs driven from the command line.

use crate::render::render_text;
use anyhow::{Context, Result};
use derive_getters::Getters;
use rewind_core::{GameHistory, MoveListOrder};
use tracing::{debug, info, instrument};

/// Moves to play and where to land afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ScriptRequest {
    /// Cell indices in play order.
    cells: Vec<usize>,
    /// Optional step to travel to once every cell has been tried.
    jump: Option<usize>,
    /// Display order of the printed move list.
    order: MoveListOrder,
}

impl ScriptRequest {
    /// Creates a new request.
    pub fn new(cells: Vec<usize>, jump: Option<usize>, order: MoveListOrder) -> Self {
        Self { cells, jump, order }
    }

    /// Plays the request against a fresh game.
    ///
    /// Illegal cells and an unknown jump target are skipped the same way the
    /// interactive UI ignores them.
    #[instrument(skip(self), fields(cells = self.cells.len()))]
    pub fn play(&self) -> GameHistory {
        let mut history = GameHistory::new();
        for &cell in &self.cells {
            if !history.play_move(cell) {
                debug!(cell, "Skipped illegal cell");
            }
        }
        if let Some(step) = self.jump
            && !history.jump_to(step)
        {
            debug!(step, "Skipped unknown step");
        }
        info!(steps = history.len(), step = history.step(), "Script finished");
        history
    }
}

/// Plays a request and formats the result as text or pretty JSON.
pub fn run_script(request: &ScriptRequest, json: bool) -> Result<String> {
    let view = request.play().view(request.order);
    if json {
        serde_json::to_string_pretty(&view).context("Failed to serialize game view")
    } else {
        Ok(render_text(&view))
    }
}
