//! Territory arena types.
//!
//! Territories are created once at map generation and live in a flat array
//! indexed by their stable id, so snapshotting a game is a plain array
//! clone. Only `owner` and `armies` mutate after generation.

use serde::{Deserialize, Serialize};

use super::grid::Direction;

/// Stable territory identifier: an index into the map's territory arena.
pub type TerritoryId = usize;

/// Player identifier, `0..player_count`.
pub type PlayerId = u8;

/// Maximum number of players in a game.
pub const MAX_PLAYERS: usize = 8;

/// Minimum number of players in a game.
pub const MIN_PLAYERS: usize = 2;

/// Army cap per territory, enforced everywhere armies are added.
pub const MAX_ARMIES: u8 = 8;

/// A contiguous group of grid cells forming one ownable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Stable id, equal to this territory's index in the arena.
    pub id: TerritoryId,
    /// Member cells, in assignment order.
    pub cells: Vec<usize>,
    /// Cell furthest from the territory border, for label placement.
    pub center: usize,
    /// Owning player, or `None` for an unowned territory.
    pub owner: Option<PlayerId>,
    /// Army count, always within `1..=MAX_ARMIES` during play.
    pub armies: u8,
    /// Adjacency flags over all territory ids. Symmetric by construction.
    pub adjacent: Vec<bool>,
    /// Border trace as (cell, edge direction) pairs, ordered by cell then
    /// direction. Consumed by renderers only.
    pub border: Vec<(usize, Direction)>,
}

impl Territory {
    /// Number of member cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if this territory shares an edge with `other`.
    pub fn is_adjacent_to(&self, other: TerritoryId) -> bool {
        self.adjacent.get(other).copied().unwrap_or(false)
    }

    /// Adds armies, saturating at the per-territory cap. Returns how many
    /// were actually absorbed.
    pub fn add_armies(&mut self, count: u8) -> u8 {
        let room = MAX_ARMIES - self.armies;
        let absorbed = count.min(room);
        self.armies += absorbed;
        absorbed
    }

    /// Returns true if another army fits under the cap.
    pub fn under_cap(&self) -> bool {
        self.armies < MAX_ARMIES
    }
}
