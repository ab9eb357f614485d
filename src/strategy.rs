//! The default bot strategy.
//!
//! A pure decision function over a state snapshot: rank the players, flag a
//! dominant one, enumerate plausible attacks, and pick one uniformly at
//! random (or skip). Deterministic given the RNG state, so bot-driven games
//! replay exactly.

use crate::board::{GameState, PlayerId, TerritoryId};
use crate::rng::GameRng;

/// Armies above this share (2/5) of the global total mark a player as
/// dominant. Kept as a ratio so the comparison stays in integers.
const DOMINANCE_NUM: u64 = 2;
const DOMINANCE_DEN: u64 = 5;

/// Probability of keeping an equal-army matchup when neither side tops the
/// ranking.
const EQUAL_ODDS: f64 = 0.9;

/// What the bot wants to do with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotDecision {
    Attack { from: TerritoryId, to: TerritoryId },
    Skip,
}

/// Ranks players by army total, then territory count, then id.
fn ranking(state: &GameState) -> Vec<PlayerId> {
    let mut order: Vec<PlayerId> = (0..state.player_count() as u8).collect();
    order.sort_by(|a, b| {
        let pa = &state.players[*a as usize];
        let pb = &state.players[*b as usize];
        pb.armies
            .cmp(&pa.armies)
            .then(pb.territories.cmp(&pa.territories))
            .then(a.cmp(b))
    });
    order
}

/// Decides an attack or a skip for `player`.
///
/// Candidates are attacks from any owned territory with more than one army
/// onto an adjacent enemy territory with no more armies than the attacker.
/// When a dominant player exists, only attacks involving them survive.
/// Equal-army matchups are kept when either side tops the ranking, or with
/// 90% probability otherwise.
pub fn decide(state: &GameState, player: PlayerId, rng: &mut GameRng) -> BotDecision {
    let order = ranking(state);
    let top = order[0];
    let global: u64 = state.players.iter().map(|p| u64::from(p.armies)).sum();
    let dominant: Option<PlayerId> = order
        .iter()
        .copied()
        .find(|p| u64::from(state.players[*p as usize].armies) * DOMINANCE_DEN > global * DOMINANCE_NUM);

    let mut candidates: Vec<(TerritoryId, TerritoryId)> = Vec::new();
    for from in &state.map.territories {
        if from.owner != Some(player) || from.armies <= 1 {
            continue;
        }
        for to in 0..state.map.territory_count() {
            if !from.is_adjacent_to(to) {
                continue;
            }
            let target = &state.map.territories[to];
            if target.owner == Some(player) || target.armies > from.armies {
                continue;
            }
            if let Some(dominant) = dominant {
                if player != dominant && target.owner != Some(dominant) {
                    continue;
                }
            }
            if target.armies == from.armies
                && player != top
                && target.owner != Some(top)
                && !rng.chance(EQUAL_ODDS)
            {
                continue;
            }
            candidates.push((from.id, to));
        }
    }

    if candidates.is_empty() {
        BotDecision::Skip
    } else {
        let (from, to) = candidates[rng.pick(candidates.len())];
        BotDecision::Attack { from, to }
    }
}
