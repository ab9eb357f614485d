//! Dice combat resolution.
//!
//! An attack rolls one six-sided die per army on each side and compares the
//! sums. The attacker needs a strictly greater total; ties favor the
//! defender. Rolling and applying are separate steps so that replay and redo
//! can re-apply a recorded result without touching the RNG.

use serde::{Deserialize, Serialize};

use crate::board::{GameMap, TerritoryId};
use crate::rng::GameRng;

/// Immutable record of one attack's dice rolls and outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    /// Attacking territory.
    pub attacker: TerritoryId,
    /// Defending territory.
    pub defender: TerritoryId,
    /// One roll per attacking army.
    pub attacker_rolls: Vec<u8>,
    /// One roll per defending army.
    pub defender_rolls: Vec<u8>,
    /// Sum of the attacker's rolls.
    pub attacker_total: u32,
    /// Sum of the defender's rolls.
    pub defender_total: u32,
    /// True if the attacker's total was strictly greater.
    pub captured: bool,
}

/// Rolls out an attack between two territories.
///
/// Does not mutate the map; callers apply the result with [`apply_combat`].
/// Validity (ownership, adjacency, army minimums) is the engine's job.
pub fn roll_attack(
    map: &GameMap,
    from: TerritoryId,
    to: TerritoryId,
    rng: &mut GameRng,
) -> CombatResult {
    let attacker_rolls: Vec<u8> = (0..map.territories[from].armies).map(|_| rng.d6()).collect();
    let defender_rolls: Vec<u8> = (0..map.territories[to].armies).map(|_| rng.d6()).collect();
    let attacker_total: u32 = attacker_rolls.iter().map(|r| u32::from(*r)).sum();
    let defender_total: u32 = defender_rolls.iter().map(|r| u32::from(*r)).sum();
    CombatResult {
        attacker: from,
        defender: to,
        attacker_rolls,
        defender_rolls,
        attacker_total,
        defender_total,
        captured: attacker_total > defender_total,
    }
}

/// Applies a combat result to the map.
///
/// On capture the defender changes hands with `attacker_armies - 1` armies
/// and the attacker drops to 1; on a failed attack only the attacker drops
/// to 1. Shared by live play, redo, and replay.
pub fn apply_combat(map: &mut GameMap, result: &CombatResult) {
    let attacker_armies = map.territories[result.attacker].armies;
    if result.captured {
        let attacker_owner = map.territories[result.attacker].owner;
        let defender = &mut map.territories[result.defender];
        defender.owner = attacker_owner;
        defender.armies = attacker_armies - 1;
    }
    map.territories[result.attacker].armies = 1;
}
