//! Shared fixtures for unit tests.
//!
//! Hand-built miniature maps with explicit adjacency, so combat, engine, and
//! history tests can pin exact scenarios without running the generator.

use crate::board::{build_neighbor_table, GameMap, GameState, PlayerId, Territory, CELL_COUNT};
use crate::resolve::update_player_stats;

/// Builds a map from `(owner, armies)` specs and undirected adjacency links.
/// Each territory gets two synthetic cells so validity checks pass.
pub fn custom_map(specs: &[(Option<PlayerId>, u8)], links: &[(usize, usize)]) -> GameMap {
    let n = specs.len();
    let mut cell_territory = vec![None; CELL_COUNT];
    let mut territories = Vec::with_capacity(n);

    for (id, (owner, armies)) in specs.iter().enumerate() {
        let cells = vec![id * 2, id * 2 + 1];
        for &c in &cells {
            cell_territory[c] = Some(id);
        }
        territories.push(Territory {
            id,
            center: cells[0],
            cells,
            owner: *owner,
            armies: *armies,
            adjacent: vec![false; n],
            border: Vec::new(),
        });
    }

    for &(a, b) in links {
        territories[a].adjacent[b] = true;
        territories[b].adjacent[a] = true;
    }

    let player_count = specs
        .iter()
        .filter_map(|(owner, _)| *owner)
        .max()
        .map(|p| p + 1)
        .unwrap_or(2)
        .max(2);

    GameMap {
        width: crate::board::GRID_WIDTH,
        height: crate::board::GRID_HEIGHT,
        cell_territory,
        neighbors: build_neighbor_table(),
        territories,
        player_count,
        seed: 99,
    }
}

/// Two players, four territories in a chain: 0-1-2-3.
/// Player 0 owns {0, 1}, player 1 owns {2, 3}.
pub fn four_territory_map() -> GameMap {
    custom_map(
        &[(Some(0), 3), (Some(0), 2), (Some(1), 2), (Some(1), 1)],
        &[(0, 1), (1, 2), (2, 3)],
    )
}

/// Opening state over [`four_territory_map`], with stats computed.
pub fn four_territory_state() -> GameState {
    let mut state = GameState::new(four_territory_map());
    update_player_stats(&mut state);
    state
}

/// State over an arbitrary custom map, with stats computed.
pub fn state_of(specs: &[(Option<PlayerId>, u8)], links: &[(usize, usize)]) -> GameState {
    let mut state = GameState::new(custom_map(specs, links));
    update_player_stats(&mut state);
    state
}
