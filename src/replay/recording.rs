//! The recording data model.
//!
//! A recording is the initial game snapshot plus the ordered log of
//! committed events. Attack events carry their dice rolls, so replaying a
//! recording never re-invokes the RNG; only the map-generation seed rides
//! along (inside the snapshot) for reproducibility.

use serde::{Deserialize, Serialize};

use crate::board::{GameState, PlayerId};
use crate::engine::TurnEvent;

/// Current recording format version. Bumped when the serialized shape or
/// the meaning of any event changes.
pub const RECORDING_VERSION: u16 = 1;

/// How the recorded game was driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// A human plays one seat against bots.
    Interactive,
    /// All seats are bot-driven.
    Bots,
}

/// A complete, replayable game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub version: u16,
    pub game_mode: GameMode,
    /// The human-controlled seat, if any.
    pub human_player: Option<PlayerId>,
    /// Snapshot the event log applies to.
    pub initial: GameState,
    /// Committed events in order.
    pub events: Vec<TurnEvent>,
}
