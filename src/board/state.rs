//! Game state representation.
//!
//! `GameState` is the aggregate root: the map, per-player statistics, the
//! current player, the phase, and the bookkeeping needed to detect the end
//! of an attack round. States are superseded wholesale on each transition
//! (cloned, mutated, swapped) so undo/redo and replay stay tractable.

use serde::{Deserialize, Serialize};

use super::map::GameMap;
use super::territory::PlayerId;

/// The phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players attack in turn or pass.
    Attack,
    /// All active players have passed; reinforcements are due.
    Reinforcement,
    /// A single player remains; no further actions are accepted.
    GameOver,
}

/// Per-player derived statistics plus the persistent reserve pool.
///
/// Everything except `reserve` is recomputed after every map mutation and is
/// never independently authoritative. `reserve` holds armies that could not
/// be placed under the per-territory cap and carries across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Number of territories owned.
    pub territories: usize,
    /// Total armies across owned territories.
    pub armies: u32,
    /// Size of the largest group of mutually connected owned territories.
    pub largest_component: usize,
    /// Armies held back because every owned territory was at the cap.
    pub reserve: u32,
}

/// Complete game snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The map, including the territory arena.
    pub map: GameMap,
    /// Player statistics, indexed by `PlayerId`.
    pub players: Vec<PlayerState>,
    /// The player whose action is awaited.
    pub current: PlayerId,
    /// Current phase.
    pub phase: GamePhase,
    /// Players who have skipped since the last reset, indexed by `PlayerId`.
    pub skipped: Vec<bool>,
    /// Players with zero territories, indexed by `PlayerId`.
    pub eliminated: Vec<bool>,
    /// The winner, once the game is over.
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Creates the opening state for a freshly generated map.
    ///
    /// Player statistics start at zero; callers run
    /// [`crate::resolve::update_player_stats`] once the state exists.
    pub fn new(map: GameMap) -> Self {
        let n = map.player_count as usize;
        GameState {
            map,
            players: vec![PlayerState::default(); n],
            current: 0,
            phase: GamePhase::Attack,
            skipped: vec![false; n],
            eliminated: vec![false; n],
            winner: None,
        }
    }

    /// Number of players in the game, eliminated or not.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns true if the player has been eliminated.
    pub fn is_eliminated(&self, player: PlayerId) -> bool {
        self.eliminated
            .get(player as usize)
            .copied()
            .unwrap_or(true)
    }

    /// Number of players still in the game.
    pub fn active_player_count(&self) -> usize {
        self.eliminated.iter().filter(|e| !**e).count()
    }

    /// Returns the next non-eliminated player after `player`, wrapping
    /// around. Returns `player` itself if no other player is active.
    pub fn next_active_after(&self, player: PlayerId) -> PlayerId {
        let n = self.player_count() as u8;
        let mut candidate = player;
        for _ in 0..n {
            candidate = (candidate + 1) % n;
            if !self.is_eliminated(candidate) {
                return candidate;
            }
        }
        player
    }

    /// Advances `current` to the next non-eliminated player.
    pub fn advance_player(&mut self) {
        self.current = self.next_active_after(self.current);
    }

    /// Returns true once every non-eliminated player has skipped since the
    /// last reset.
    pub fn all_active_skipped(&self) -> bool {
        self.eliminated
            .iter()
            .zip(self.skipped.iter())
            .all(|(eliminated, skipped)| *eliminated || *skipped)
    }

    /// Clears the skip-tracker.
    pub fn clear_skips(&mut self) {
        for s in &mut self.skipped {
            *s = false;
        }
    }
}
