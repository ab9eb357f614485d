//! Reinforcement math: connected components and capped distribution.
//!
//! A player's reinforcement income equals the size of their largest group of
//! mutually connected territories. Armies are placed one at a time on a
//! uniformly random owned territory that is still under the cap; the
//! eligible set is recomputed for every unit, because cap state changes as
//! armies land. Units with nowhere to go accumulate in the player's reserve
//! and carry over to the next round.

use crate::board::{GameMap, PlayerId, TerritoryId};
use crate::rng::GameRng;

/// Returns the size of the player's largest connected component of owned
/// territories, or 0 if the player owns nothing.
pub fn largest_connected_component(map: &GameMap, player: PlayerId) -> usize {
    let n = map.territory_count();
    let mut visited = vec![false; n];
    let mut best = 0;
    let mut stack = Vec::new();

    for start in 0..n {
        if visited[start] || map.territories[start].owner != Some(player) {
            continue;
        }
        let mut size = 0;
        stack.push(start);
        visited[start] = true;
        while let Some(t) = stack.pop() {
            size += 1;
            for other in 0..n {
                if !visited[other]
                    && map.territories[t].is_adjacent_to(other)
                    && map.territories[other].owner == Some(player)
                {
                    visited[other] = true;
                    stack.push(other);
                }
            }
        }
        best = best.max(size);
    }
    best
}

/// Distributes `new_armies + reserve` units onto the player's territories.
///
/// Each unit re-evaluates the under-cap eligible set before placing; a unit
/// with no eligible territory goes to the returned reserve. Returns the
/// placement list in order (for the recording) and the final reserve.
pub fn distribute_reinforcements(
    map: &mut GameMap,
    player: PlayerId,
    new_armies: u32,
    reserve: u32,
    rng: &mut GameRng,
) -> (Vec<TerritoryId>, u32) {
    let total = new_armies + reserve;
    let mut placements = Vec::new();
    let mut leftover = 0;

    for _ in 0..total {
        let eligible: Vec<TerritoryId> = map
            .territories
            .iter()
            .filter(|t| t.owner == Some(player) && t.under_cap())
            .map(|t| t.id)
            .collect();
        if eligible.is_empty() {
            leftover += 1;
            continue;
        }
        let target = eligible[rng.pick(eligible.len())];
        map.territories[target].add_armies(1);
        placements.push(target);
    }

    (placements, leftover)
}
