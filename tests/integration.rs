//! Integration tests for the hexfray binary.
//!
//! Tests the interactive session flow by spawning the binary, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the binary and collects stdout lines.
fn run_session(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_hexfray");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start hexfray");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_session(&["foobar", "nonsense 1 2", "quit"]);
    assert!(lines.is_empty());
}

#[test]
fn empty_lines_are_ignored() {
    let lines = run_session(&["", "   ", "quit"]);
    assert!(lines.is_empty());
}

#[test]
fn actions_without_a_game_report_an_error() {
    let lines = run_session(&["attack 0 1", "skip", "reinforce", "undo", "show", "quit"]);
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| l.starts_with("error: ")));
}

#[test]
fn new_game_reports_map_and_seed() {
    let lines = run_session(&["new 4", "quit"]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("map "), "got: {}", lines[0]);
    assert!(lines[0].contains(" 4 players seed "), "got: {}", lines[0]);
}

#[test]
fn invalid_player_count_is_an_error() {
    let lines = run_session(&["new 9", "quit"]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("error: "), "got: {}", lines[0]);
}

#[test]
fn show_lists_every_player() {
    let lines = run_session(&["new 3", "show", "quit"]);
    let players: Vec<&String> = lines.iter().filter(|l| l.starts_with("player ")).collect();
    assert_eq!(players.len(), 3);
    let phase_lines: Vec<&String> = lines.iter().filter(|l| l.starts_with("phase ")).collect();
    assert_eq!(phase_lines.len(), 1);
    assert!(phase_lines[0].contains("attack"));
}

#[test]
fn skip_passes_the_turn() {
    let lines = run_session(&["new 4", "skip", "quit"]);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("phase attack player "), "got: {}", lines[1]);
    assert!(!lines[1].ends_with("player 0"), "turn did not pass: {}", lines[1]);
}

#[test]
fn invalid_attack_reports_a_typed_error() {
    let lines = run_session(&["new 2", "attack 500 501", "quit"]);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("error: territory 500"), "got: {}", lines[1]);
}

#[test]
fn undo_without_history_is_an_error() {
    let lines = run_session(&["new 2", "undo", "quit"]);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "error: nothing to undo");
}

#[test]
fn undo_after_skip_restores_the_turn() {
    let lines = run_session(&["new 2", "skip", "undo", "redo", "quit"]);
    assert_eq!(lines.len(), 4);
    assert!(lines[2].ends_with("player 0"), "undo: {}", lines[2]);
    assert_eq!(lines[1], lines[3], "redo must match the skip");
}

#[test]
fn save_then_load_resumes_the_session() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("hexfray-test-{}.hfz", std::process::id()));
    let path = path.to_str().unwrap();

    let save = format!("save {}", path);
    let load = format!("load {}", path);
    let lines = run_session(&["new 3", "skip", &save, &load, "show", "quit"]);

    assert!(lines.iter().any(|l| l.starts_with("saved ")), "{:?}", lines);
    assert!(lines.iter().any(|l| l.starts_with("loaded ")), "{:?}", lines);
    // The loaded session shows the same post-skip turn.
    let skip_line = &lines[1];
    let loaded_idx = lines.iter().position(|l| l.starts_with("loaded ")).unwrap();
    assert_eq!(&lines[loaded_idx + 1], skip_line);

    let _ = std::fs::remove_file(path);
}

#[test]
fn loading_garbage_fails_loudly() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("hexfray-garbage-{}.json", std::process::id()));
    std::fs::write(&path, b"not a recording").unwrap();
    let load = format!("load {}", path.to_str().unwrap());
    let lines = run_session(&[&load, "quit"]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("error: "), "got: {}", lines[0]);
    let _ = std::fs::remove_file(&path);
}
