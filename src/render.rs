//! Plain-text rendering of a game view for non-interactive output.

use rewind_core::{GameView, Position};
use tracing::instrument;

/// Renders board, status and move list as text.
///
/// Winning cells are bracketed and the current move-list entry is prefixed
/// with `>`.
#[instrument(skip(view), fields(step = view.step))]
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    let line: &[Position] = match &view.winning_line {
        Some(line) => line,
        None => &[],
    };

    for row in 0..3 {
        for col in 0..3 {
            let Some(pos) = Position::from_coordinates(row, col) else {
                continue;
            };
            let mark = view
                .board
                .get(pos)
                .player()
                .map(|p| p.to_string())
                .unwrap_or_else(|| ".".to_string());
            let cell = if line.contains(&pos) {
                format!("[{}]", mark)
            } else {
                format!(" {} ", mark)
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    out.push_str(&format!("\n{}", view.status));
    if view.board_full {
        out.push_str(" (board full)");
    }
    out.push('\n');

    out.push_str(&format!("\nMoves ({}):\n", view.order));
    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!(
            "{} {:>2}. {}\n",
            marker,
            entry.step,
            entry.description()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_core::{GameHistory, MoveListOrder};

    #[test]
    fn test_render_win() {
        let mut game = GameHistory::new();
        for cell in [0, 1, 4, 2, 8] {
            game.play_move(cell);
        }
        let text = render_text(&game.view(MoveListOrder::Ascending));

        assert!(text.starts_with("[X] O  O \n . [X] . \n .  . [X]\n"));
        assert!(text.contains("Winner: X\n"));
        assert!(text.contains(">  5. Go to move #5 (row 2, column 2)"));
        assert!(text.contains("Moves (ascending):"));
    }

    #[test]
    fn test_render_descending_after_jump() {
        let mut game = GameHistory::new();
        game.play_move(4);
        game.play_move(0);
        game.jump_to(1);
        let text = render_text(&game.view(MoveListOrder::Descending));

        let list: Vec<_> = text.lines().skip_while(|l| !l.starts_with("Moves")).skip(1).collect();
        assert_eq!(
            list,
            vec![
                "   2. Go to move #2 (row 0, column 0)",
                ">  1. Go to move #1 (row 1, column 1)",
                "   0. Go to game start",
            ]
        );
        assert!(text.contains("Next player: O\n"));
    }

    #[test]
    fn test_render_full_board_without_line() {
        let mut game = GameHistory::new();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play_move(cell);
        }
        let text = render_text(&game.view(MoveListOrder::Ascending));

        assert!(text.starts_with(" X  O  X \n X  O  O \n O  X  X \n"));
        assert!(!text.contains('['));
        assert!(text.contains("Next player: O (board full)\n"));
        assert!(text.ends_with(">  9. Go to move #9 (row 2, column 2)\n"));
    }
}
