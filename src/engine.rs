//! Turn state machine.
//!
//! `Engine` owns the live `GameState` and the RNG, sequences
//! attack/skip/reinforcement/elimination/victory transitions, and delegates
//! the math to `resolve`. Every action validates fully before committing, so
//! a failure never leaves a partial mutation. Committed transitions are
//! captured as reversible commands for undo/redo and exported as a
//! recording for replay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{GamePhase, GameState, PlayerId, TerritoryId};
use crate::history::{Command, History, UndoInfo};
use crate::mapgen::{self, MapGenConfig, MapGenError};
use crate::replay::{GameMode, Recording, ReplayError, RECORDING_VERSION};
use crate::resolve::{self, roll_attack, CombatResult};
use crate::rng::GameRng;
use crate::strategy::{self, BotDecision};

/// Typed failures for engine actions. All are local and recoverable; the
/// state is untouched when one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("territory {0} does not exist or has no cells")]
    InvalidTerritory(TerritoryId),

    #[error("player {0} does not own the acting territory or the turn")]
    NotOwner(PlayerId),

    #[error("territory {0} needs more than one army to attack")]
    InsufficientArmies(TerritoryId),

    #[error("territories {0} and {1} are not adjacent")]
    NotAdjacent(TerritoryId, TerritoryId),

    #[error("a player cannot attack their own territory")]
    SelfAttack,

    #[error("action not allowed in the {0:?} phase")]
    WrongPhase(GamePhase),
}

/// One player's share of a reinforcement round: the territories that
/// received an army, in placement order, and the resulting reserve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReinforcementAllocation {
    pub player: PlayerId,
    pub placements: Vec<TerritoryId>,
    pub reserve: u32,
}

/// The effect of one committed transition: everything replay needs to
/// reproduce it without re-rolling dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnEvent {
    Attack {
        from: TerritoryId,
        to: TerritoryId,
        result: CombatResult,
    },
    Skip {
        player: PlayerId,
    },
    Reinforcement {
        allocations: Vec<ReinforcementAllocation>,
    },
}

/// Applies a committed event to a state. The single mutation path shared by
/// live play, redo, and replay; callers have already validated the event.
pub fn apply_event(state: &mut GameState, event: &TurnEvent) {
    match event {
        TurnEvent::Attack { from: _, to, result } => {
            let defender_owner = state.map.territories[*to].owner;
            resolve::apply_combat(&mut state.map, result);
            resolve::update_player_stats(state);
            state.clear_skips();

            // Victory is checked only after a successful attack.
            let mut game_over = false;
            if result.captured {
                if let Some(loser) = defender_owner {
                    if state.players[loser as usize].territories == 0 {
                        state.eliminated[loser as usize] = true;
                    }
                }
                if state.active_player_count() == 1 {
                    state.phase = GamePhase::GameOver;
                    state.winner = Some(state.current);
                    game_over = true;
                }
            }
            if !game_over {
                state.advance_player();
            }
        }
        TurnEvent::Skip { player } => {
            state.skipped[*player as usize] = true;
            if state.all_active_skipped() {
                state.phase = GamePhase::Reinforcement;
            } else {
                state.advance_player();
            }
        }
        TurnEvent::Reinforcement { allocations } => {
            for alloc in allocations {
                for &tid in &alloc.placements {
                    state.map.territories[tid].add_armies(1);
                }
                state.players[alloc.player as usize].reserve = alloc.reserve;
            }
            state.phase = GamePhase::Attack;
            state.clear_skips();
            resolve::update_player_stats(state);
        }
    }
}

/// The game engine: live state, RNG, and command history.
pub struct Engine {
    state: GameState,
    rng: GameRng,
    history: History,
    initial: GameState,
    mode: GameMode,
    human_player: Option<PlayerId>,
}

impl Engine {
    /// Starts a new game on a freshly generated map with default settings.
    ///
    /// `None` draws a seed from entropy (echoed via [`Engine::seed`]). A
    /// seed whose map falls outside the territory band is reported as an
    /// error; the caller picks a different seed.
    pub fn new_game(seed: Option<u64>, player_count: u8) -> Result<Engine, MapGenError> {
        Engine::new_game_with(
            seed,
            player_count,
            &MapGenConfig::default(),
            GameMode::Interactive,
            None,
        )
    }

    /// Starts a new game with explicit generation config and mode metadata.
    pub fn new_game_with(
        seed: Option<u64>,
        player_count: u8,
        config: &MapGenConfig,
        mode: GameMode,
        human_player: Option<PlayerId>,
    ) -> Result<Engine, MapGenError> {
        let mut rng = GameRng::new(seed);
        let map = mapgen::generate_with_rng(&mut rng, player_count, config)?;
        let mut state = GameState::new(map);
        resolve::update_player_stats(&mut state);
        let initial = state.clone();
        Ok(Engine {
            state,
            rng,
            history: History::new(),
            initial,
            mode,
            human_player,
        })
    }

    /// Reconstructs an engine from a recording by replaying its events.
    ///
    /// The RNG is re-seeded from the map-generation seed; recorded events
    /// carry their own dice, so replay itself consumes no randomness.
    pub fn from_recording(recording: &Recording) -> Result<Engine, ReplayError> {
        let state = crate::replay::replay(recording)?;
        let rng = GameRng::new(Some(state.map.seed));
        Ok(Engine {
            rng,
            state,
            history: History::new(),
            initial: recording.initial.clone(),
            mode: recording.game_mode,
            human_player: recording.human_player,
        })
    }

    /// The current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The effective map-generation seed.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn require_phase(&self, phase: GamePhase) -> Result<(), GameError> {
        if self.state.phase == phase {
            Ok(())
        } else {
            Err(GameError::WrongPhase(self.state.phase))
        }
    }

    fn require_territory(&self, id: TerritoryId) -> Result<(), GameError> {
        match self.state.map.territory(id) {
            Some(t) if t.cell_count() > 0 => Ok(()),
            _ => Err(GameError::InvalidTerritory(id)),
        }
    }

    /// Resolves an attack from the current player.
    ///
    /// Validates phase, territory ids, ownership, army minimum, target
    /// ownership, and adjacency before any state is touched.
    pub fn attack(
        &mut self,
        from: TerritoryId,
        to: TerritoryId,
    ) -> Result<&GameState, GameError> {
        self.require_phase(GamePhase::Attack)?;
        self.require_territory(from)?;
        self.require_territory(to)?;
        if from == to {
            return Err(GameError::SelfAttack);
        }
        let current = self.state.current;
        if self.state.map.territories[from].owner != Some(current) {
            return Err(GameError::NotOwner(current));
        }
        if self.state.map.territories[from].armies <= 1 {
            return Err(GameError::InsufficientArmies(from));
        }
        if self.state.map.territories[to].owner == Some(current) {
            return Err(GameError::SelfAttack);
        }
        if !self.state.map.are_adjacent(from, to) {
            return Err(GameError::NotAdjacent(from, to));
        }

        let undo = UndoInfo::capture(&self.state, &[from, to]);
        let result = roll_attack(&self.state.map, from, to, &mut self.rng);
        log::debug!(
            "attack {} -> {}: {} vs {} ({})",
            from,
            to,
            result.attacker_total,
            result.defender_total,
            if result.captured { "captured" } else { "repelled" }
        );
        let event = TurnEvent::Attack { from, to, result };
        apply_event(&mut self.state, &event);
        self.history.push(Command { event, undo });
        Ok(&self.state)
    }

    /// Records a pass from `player`, who must hold the turn. Once every
    /// active player has skipped since the last reset, the phase flips to
    /// `Reinforcement`.
    pub fn skip(&mut self, player: PlayerId) -> Result<&GameState, GameError> {
        self.require_phase(GamePhase::Attack)?;
        if player != self.state.current {
            return Err(GameError::NotOwner(player));
        }

        let undo = UndoInfo::capture(&self.state, &[]);
        let event = TurnEvent::Skip { player };
        apply_event(&mut self.state, &event);
        self.history.push(Command { event, undo });
        Ok(&self.state)
    }

    /// Runs the reinforcement round for every active player and returns the
    /// phase to `Attack`. The current player is unchanged.
    pub fn apply_reinforcement(&mut self) -> Result<&GameState, GameError> {
        self.require_phase(GamePhase::Reinforcement)?;

        // Roll out the distribution on a scratch map so the committed event
        // flows through the same apply path as redo and replay.
        let mut scratch = self.state.map.clone();
        let mut allocations = Vec::new();
        for player in 0..self.state.player_count() as u8 {
            if self.state.is_eliminated(player) {
                continue;
            }
            let income = resolve::largest_connected_component(&scratch, player) as u32;
            let reserve = self.state.players[player as usize].reserve;
            let (placements, reserve) = resolve::distribute_reinforcements(
                &mut scratch,
                player,
                income,
                reserve,
                &mut self.rng,
            );
            allocations.push(ReinforcementAllocation {
                player,
                placements,
                reserve,
            });
        }

        log::debug!(
            "reinforcement round: {:?}",
            allocations
                .iter()
                .map(|a| (a.player, a.placements.len(), a.reserve))
                .collect::<Vec<_>>()
        );
        let touched: Vec<TerritoryId> = allocations
            .iter()
            .flat_map(|a| a.placements.iter().copied())
            .collect();
        let undo = UndoInfo::capture(&self.state, &touched);
        let event = TurnEvent::Reinforcement { allocations };
        apply_event(&mut self.state, &event);
        self.history.push(Command { event, undo });
        Ok(&self.state)
    }

    /// Asks the default strategy for a decision for the current player.
    pub fn bot_decision(&mut self) -> BotDecision {
        strategy::decide(&self.state, self.state.current, &mut self.rng)
    }

    /// Lets the default strategy act for the current player.
    pub fn bot_act(&mut self) -> Result<&GameState, GameError> {
        match self.bot_decision() {
            BotDecision::Attack { from, to } => self.attack(from, to),
            BotDecision::Skip => {
                let player = self.state.current;
                self.skip(player)
            }
        }
    }

    /// Reverts the most recent committed action. Returns false at the
    /// beginning of history.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.state)
    }

    /// Re-applies the most recently undone action. Returns false at the end
    /// of history.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.state)
    }

    /// True if there is an action to undo.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True if there is an undone action to redo.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Exports the committed prefix of this game as a replayable recording.
    /// Actions sitting beyond the undo cursor are not included.
    pub fn export_recording(&self) -> Recording {
        Recording {
            version: RECORDING_VERSION,
            game_mode: self.mode,
            human_player: self.human_player,
            initial: self.initial.clone(),
            events: self
                .history
                .committed()
                .iter()
                .map(|c| c.event.clone())
                .collect(),
        }
    }
}
