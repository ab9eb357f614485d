//! The generated game map.
//!
//! `GameMap` is an immutable-shape container: the grid, the cell-to-territory
//! assignment, the precomputed neighbor table, and the territory arena. After
//! generation only territory ownership and army counts change.

use serde::{Deserialize, Serialize};

use super::territory::{PlayerId, Territory, TerritoryId};

/// A complete generated map: grid topology plus the territory arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Territory id per cell; `None` marks unplayable water.
    pub cell_territory: Vec<Option<TerritoryId>>,
    /// Per-cell neighbor table, indexed `[cell][direction]`.
    pub neighbors: Vec<[Option<usize>; 6]>,
    /// Territory arena indexed by `TerritoryId`.
    pub territories: Vec<Territory>,
    /// Number of players this map was generated for.
    pub player_count: u8,
    /// The RNG seed the map was generated from, echoed for reproducibility.
    pub seed: u64,
}

impl GameMap {
    /// Number of territories on the map.
    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    /// Returns the territory with the given id, if it exists.
    pub fn territory(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id)
    }

    /// Returns true if the two territories share an edge.
    pub fn are_adjacent(&self, a: TerritoryId, b: TerritoryId) -> bool {
        self.territories
            .get(a)
            .map(|t| t.is_adjacent_to(b))
            .unwrap_or(false)
    }

    /// Iterates over the ids of all territories owned by `player`.
    pub fn territories_of(&self, player: PlayerId) -> impl Iterator<Item = TerritoryId> + '_ {
        self.territories
            .iter()
            .filter(move |t| t.owner == Some(player))
            .map(|t| t.id)
    }

    /// Counts the territories owned by `player`.
    pub fn territory_count_of(&self, player: PlayerId) -> usize {
        self.territories_of(player).count()
    }

    /// Sums the armies on territories owned by `player`.
    pub fn army_total_of(&self, player: PlayerId) -> u32 {
        self.territories
            .iter()
            .filter(|t| t.owner == Some(player))
            .map(|t| u32::from(t.armies))
            .sum()
    }

    /// Sums the armies across the whole map.
    pub fn army_total(&self) -> u32 {
        self.territories.iter().map(|t| u32::from(t.armies)).sum()
    }
}

/// Checks the structural invariants of a generated map. Used by the
/// generator's tests and by replay decoding.
pub fn adjacency_is_symmetric(map: &GameMap) -> bool {
    let n = map.territory_count();
    for a in 0..n {
        for b in 0..n {
            if map.territories[a].is_adjacent_to(b) != map.territories[b].is_adjacent_to(a) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;

    #[test]
    fn ownership_queries_agree() {
        let map = testkit::four_territory_map();
        assert_eq!(map.territory_count(), 4);
        assert_eq!(map.territory_count_of(0), 2);
        assert_eq!(map.territory_count_of(1), 2);
        let ids: Vec<_> = map.territories_of(0).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn army_totals_sum_over_owned() {
        let map = testkit::four_territory_map();
        let total: u32 = (0..2).map(|p| map.army_total_of(p)).sum();
        assert_eq!(total, map.army_total());
    }

    #[test]
    fn adjacency_queries_are_bounds_safe() {
        let map = testkit::four_territory_map();
        assert!(map.are_adjacent(0, 1));
        assert!(!map.are_adjacent(0, 99));
        assert!(!map.are_adjacent(99, 0));
        assert!(map.territory(99).is_none());
    }

    #[test]
    fn fixture_adjacency_is_symmetric() {
        let map = testkit::four_territory_map();
        assert!(adjacency_is_symmetric(&map));
    }
}
