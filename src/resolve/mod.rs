//! Combat and reinforcement logic.
//!
//! Stateless functions over a map snapshot: dice resolution, connected
//! component sizing, and capped reinforcement distribution. The engine
//! sequences these; nothing here knows about phases or turn order.

pub mod combat;
pub mod reinforce;

pub use combat::{apply_combat, roll_attack, CombatResult};
pub use reinforce::{distribute_reinforcements, largest_connected_component};

use crate::board::GameState;

/// Recomputes every player's derived statistics from the map.
///
/// Called after every map mutation. The reserve field is authoritative state
/// and is left untouched.
pub fn update_player_stats(state: &mut GameState) {
    for player in 0..state.players.len() {
        let id = player as u8;
        let stats = &mut state.players[player];
        stats.territories = state.map.territory_count_of(id);
        stats.armies = state.map.army_total_of(id);
        stats.largest_component = largest_connected_component(&state.map, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;

    #[test]
    fn stats_reflect_the_map() {
        let state = testkit::four_territory_state();
        assert_eq!(state.players[0].territories, 2);
        assert_eq!(state.players[0].armies, 3 + 2);
        assert_eq!(state.players[0].largest_component, 2);
        assert_eq!(state.players[1].territories, 2);
        assert_eq!(state.players[1].armies, 2 + 1);
    }

    #[test]
    fn reserve_survives_recompute() {
        let mut state = testkit::four_territory_state();
        state.players[0].reserve = 7;
        update_player_stats(&mut state);
        assert_eq!(state.players[0].reserve, 7);
    }

    #[test]
    fn stats_track_ownership_changes() {
        let mut state = testkit::four_territory_state();
        state.map.territories[2].owner = Some(0);
        update_player_stats(&mut state);
        assert_eq!(state.players[0].territories, 3);
        assert_eq!(state.players[0].largest_component, 3);
        assert_eq!(state.players[1].territories, 1);
        assert_eq!(state.players[1].largest_component, 1);
    }
}
