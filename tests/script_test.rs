//! Headless runs through the public library API.

use rewind::{RewindConfig, ScriptRequest, run_script};
use rewind_core::MoveListOrder;
use std::io::Write;

#[test]
fn test_script_text_output() {
    let request = ScriptRequest::new(vec![0, 1, 4, 2, 8], None, MoveListOrder::Ascending);
    let out = run_script(&request, false).unwrap();

    assert!(out.contains("Winner: X"));
    assert!(out.contains("[X]"));
    assert!(out.contains(">  5. Go to move #5 (row 2, column 2)"));
}

#[test]
fn test_script_move_after_win_ignored() {
    let request = ScriptRequest::new(vec![0, 1, 4, 2, 8, 5], None, MoveListOrder::Ascending);
    let out = run_script(&request, false).unwrap();
    assert!(!out.contains("Go to move #6"));
}

#[test]
fn test_script_jump_reopens_play() {
    // Win, travel back to step 2, then a fresh script continues from there.
    let won = ScriptRequest::new(vec![0, 1, 4, 2, 8], Some(2), MoveListOrder::Ascending);
    let history = won.play();
    assert_eq!(history.step(), 2);

    let mut history = history;
    assert!(history.play_move(8));
    assert_eq!(history.len(), 4);
}

#[test]
fn test_config_order_feeds_script() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "move_list_order = \"descending\"").unwrap();
    let config = RewindConfig::load(Some(file.path())).unwrap();

    let request = ScriptRequest::new(vec![4, 0], None, *config.move_list_order());
    let out = run_script(&request, false).unwrap();
    let list: Vec<_> = out.lines().skip_while(|l| !l.starts_with("Moves")).collect();
    assert_eq!(list[0], "Moves (descending):");
    assert_eq!(list[1], ">  2. Go to move #2 (row 0, column 0)");
    assert_eq!(list[3], "   0. Go to game start");
}
