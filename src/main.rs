//! Hexfray -- an interactive session over stdin/stdout.
//!
//! This binary reads line commands from stdin and writes responses to
//! stdout: `new`, `attack`, `skip`, `reinforce`, `bot`, `undo`, `redo`,
//! `show`, `save`, `load`, `quit`. Unknown lines are ignored.

use std::fs;
use std::io::{self, BufRead, Write};

use hexfray::board::{GamePhase, GameState};
use hexfray::engine::Engine;
use hexfray::mapgen::MapGenError;
use hexfray::protocol::{parse_command, Command};
use hexfray::replay;

/// Attempts for an entropy-seeded `new` before giving up. A pinned seed is
/// never retried; the caller picked it deliberately.
const ENTROPY_RETRY_LIMIT: u32 = 32;

fn phase_name(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Attack => "attack",
        GamePhase::Reinforcement => "reinforce",
        GamePhase::GameOver => "gameover",
    }
}

/// Writes the one-line state summary that follows every mutation.
fn report_state<W: Write>(out: &mut W, state: &GameState) {
    match state.winner {
        Some(winner) => writeln!(out, "phase gameover winner {}", winner).unwrap(),
        None => writeln!(
            out,
            "phase {} player {}",
            phase_name(state.phase),
            state.current
        )
        .unwrap(),
    }
}

fn report_show<W: Write>(out: &mut W, engine: &Engine) {
    let state = engine.state();
    writeln!(
        out,
        "map {} territories {} players seed {}",
        state.map.territory_count(),
        state.map.player_count,
        state.map.seed
    )
    .unwrap();
    for (i, player) in state.players.iter().enumerate() {
        writeln!(
            out,
            "player {} territories {} armies {} component {} reserve {}{}",
            i,
            player.territories,
            player.armies,
            player.largest_component,
            player.reserve,
            if state.eliminated[i] { " eliminated" } else { "" }
        )
        .unwrap();
    }
    report_state(out, state);
}

/// Starts a new game, retrying fresh entropy seeds when the user did not
/// pin one and the generated map misses the territory band.
fn new_game(players: u8, seed: Option<u64>) -> Result<Engine, MapGenError> {
    if seed.is_some() {
        return Engine::new_game(seed, players);
    }
    let mut result = Engine::new_game(None, players);
    let mut attempt = 1;
    while matches!(result, Err(MapGenError::TerritoryCountOutOfRange { .. }))
        && attempt < ENTROPY_RETRY_LIMIT
    {
        result = Engine::new_game(None, players);
        attempt += 1;
    }
    result
}

fn save_recording(engine: &Engine, path: &str) -> Result<(), String> {
    let recording = engine.export_recording();
    if path.ends_with(".hfz") {
        let bytes = replay::compress(&recording).map_err(|e| e.to_string())?;
        fs::write(path, bytes).map_err(|e| e.to_string())
    } else {
        let text = replay::encode(&recording).map_err(|e| e.to_string())?;
        fs::write(path, text).map_err(|e| e.to_string())
    }
}

fn load_recording(path: &str) -> Result<Engine, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    let recording = if replay::is_envelope(&bytes) {
        replay::decompress(&bytes).map_err(|e| e.to_string())?
    } else {
        let text = String::from_utf8(bytes).map_err(|e| e.to_string())?;
        replay::decode(&text).map_err(|e| e.to_string())?
    };
    Engine::from_recording(&recording).map_err(|e| e.to_string())
}

/// Runs the main command loop, reading from stdin and writing to stdout.
fn main() {
    env_logger::init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine: Option<Engine> = None;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::New { players, seed } => match new_game(players, seed) {
                Ok(e) => {
                    writeln!(
                        out,
                        "map {} territories {} players seed {}",
                        e.state().map.territory_count(),
                        players,
                        e.seed()
                    )
                    .unwrap();
                    engine = Some(e);
                }
                Err(e) => writeln!(out, "error: {}", e).unwrap(),
            },
            Command::Attack { from, to } => match engine.as_mut() {
                Some(engine) => match engine.attack(from, to) {
                    Ok(state) => {
                        writeln!(out, "attack {} {} resolved", from, to).unwrap();
                        report_state(&mut out, state);
                    }
                    Err(e) => writeln!(out, "error: {}", e).unwrap(),
                },
                None => writeln!(out, "error: no game in progress").unwrap(),
            },
            Command::Skip => match engine.as_mut() {
                Some(engine) => {
                    let player = engine.state().current;
                    match engine.skip(player) {
                        Ok(state) => report_state(&mut out, state),
                        Err(e) => writeln!(out, "error: {}", e).unwrap(),
                    }
                }
                None => writeln!(out, "error: no game in progress").unwrap(),
            },
            Command::Reinforce => match engine.as_mut() {
                Some(engine) => match engine.apply_reinforcement() {
                    Ok(state) => report_state(&mut out, state),
                    Err(e) => writeln!(out, "error: {}", e).unwrap(),
                },
                None => writeln!(out, "error: no game in progress").unwrap(),
            },
            Command::Bot => match engine.as_mut() {
                Some(engine) => match engine.bot_act() {
                    Ok(state) => report_state(&mut out, state),
                    Err(e) => writeln!(out, "error: {}", e).unwrap(),
                },
                None => writeln!(out, "error: no game in progress").unwrap(),
            },
            Command::Undo => match engine.as_mut() {
                Some(engine) => {
                    if engine.undo() {
                        report_state(&mut out, engine.state());
                    } else {
                        writeln!(out, "error: nothing to undo").unwrap();
                    }
                }
                None => writeln!(out, "error: no game in progress").unwrap(),
            },
            Command::Redo => match engine.as_mut() {
                Some(engine) => {
                    if engine.redo() {
                        report_state(&mut out, engine.state());
                    } else {
                        writeln!(out, "error: nothing to redo").unwrap();
                    }
                }
                None => writeln!(out, "error: no game in progress").unwrap(),
            },
            Command::Show => match engine.as_ref() {
                Some(engine) => report_show(&mut out, engine),
                None => writeln!(out, "error: no game in progress").unwrap(),
            },
            Command::Save { path } => match engine.as_ref() {
                Some(engine) => match save_recording(engine, &path) {
                    Ok(()) => writeln!(out, "saved {}", path).unwrap(),
                    Err(e) => writeln!(out, "error: {}", e).unwrap(),
                },
                None => writeln!(out, "error: no game in progress").unwrap(),
            },
            Command::Load { path } => match load_recording(&path) {
                Ok(e) => {
                    writeln!(out, "loaded {}", path).unwrap();
                    report_state(&mut out, e.state());
                    engine = Some(e);
                }
                Err(e) => writeln!(out, "error: {}", e).unwrap(),
            },
            Command::Quit => break,
        }
        out.flush().unwrap();
    }
}
