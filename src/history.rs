//! Command history: an undo/redo stack of reversible transitions.
//!
//! Every committed engine action is stored as the pair of its effect (the
//! `TurnEvent`, which redo and replay re-apply verbatim) and an `UndoInfo`
//! capturing the exact prior values of everything the action touched. The
//! stack keeps a cursor; undoing moves it back, redoing forward, and a new
//! command discards the redone-away suffix.

use crate::board::{GamePhase, GameState, PlayerId, TerritoryId};
use crate::engine::{apply_event, TurnEvent};

/// Exact prior state captured before a command commits: enough to restore
/// the snapshot without replaying from the start.
#[derive(Debug, Clone)]
pub struct UndoInfo {
    phase: GamePhase,
    current: PlayerId,
    winner: Option<PlayerId>,
    skipped: Vec<bool>,
    eliminated: Vec<bool>,
    /// Prior (owner, armies) of every touched territory.
    territories: Vec<(TerritoryId, Option<PlayerId>, u8)>,
    /// Prior reserve of every player.
    reserves: Vec<u32>,
}

impl UndoInfo {
    /// Captures the restoration data for a command about to touch the given
    /// territories. Duplicate ids are recorded once.
    pub fn capture(state: &GameState, touched: &[TerritoryId]) -> UndoInfo {
        let mut territories: Vec<(TerritoryId, Option<PlayerId>, u8)> = Vec::new();
        for &id in touched {
            if territories.iter().any(|(t, _, _)| *t == id) {
                continue;
            }
            let t = &state.map.territories[id];
            territories.push((id, t.owner, t.armies));
        }
        UndoInfo {
            phase: state.phase,
            current: state.current,
            winner: state.winner,
            skipped: state.skipped.clone(),
            eliminated: state.eliminated.clone(),
            territories,
            reserves: state.players.iter().map(|p| p.reserve).collect(),
        }
    }

    /// Restores the captured values and recomputes derived statistics.
    pub fn restore(&self, state: &mut GameState) {
        for &(id, owner, armies) in &self.territories {
            let t = &mut state.map.territories[id];
            t.owner = owner;
            t.armies = armies;
        }
        for (player, &reserve) in self.reserves.iter().enumerate() {
            state.players[player].reserve = reserve;
        }
        state.phase = self.phase;
        state.current = self.current;
        state.winner = self.winner;
        state.skipped.clone_from(&self.skipped);
        state.eliminated.clone_from(&self.eliminated);
        crate::resolve::update_player_stats(state);
    }
}

/// A committed, reversible transition.
#[derive(Debug, Clone)]
pub struct Command {
    pub event: TurnEvent,
    pub undo: UndoInfo,
}

/// Undo/redo stack over committed commands.
#[derive(Debug, Default)]
pub struct History {
    commands: Vec<Command>,
    cursor: usize,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        History::default()
    }

    /// Commits a new command, discarding any redoable suffix.
    pub fn push(&mut self, command: Command) {
        self.commands.truncate(self.cursor);
        self.commands.push(command);
        self.cursor += 1;
    }

    /// Applies the inverse of the command under the cursor. Returns false at
    /// the beginning of history.
    pub fn undo(&mut self, state: &mut GameState) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.commands[self.cursor].undo.restore(state);
        true
    }

    /// Re-applies the next undone command's recorded effect. Returns false
    /// at the end of history.
    pub fn redo(&mut self, state: &mut GameState) -> bool {
        if self.cursor == self.commands.len() {
            return false;
        }
        apply_event(state, &self.commands[self.cursor].event);
        self.cursor += 1;
        true
    }

    /// The committed prefix: everything up to the cursor.
    pub fn committed(&self) -> &[Command] {
        &self.commands[..self.cursor]
    }

    /// True if a command can be undone.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// True if an undone command can be redone.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }
}
