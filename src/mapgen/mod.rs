//! Procedural map generation.
//!
//! `generate` carves the fixed hex grid into territories by percolation
//! growth, cleans up degenerate regions, computes per-territory geometry and
//! adjacency, and deals out owners and starting armies. The whole pipeline
//! draws from one seeded RNG, so a seed and player count fully determine
//! the map.

pub mod geometry;
pub mod growth;

use thiserror::Error;

use crate::board::{
    build_neighbor_table, GameMap, Territory, GRID_HEIGHT, GRID_WIDTH, MAX_ARMIES, MAX_PLAYERS,
    MIN_PLAYERS,
};
use crate::rng::GameRng;

/// Tunables for the generation pipeline.
#[derive(Debug, Clone)]
pub struct MapGenConfig {
    /// Directed-growth target size per territory, in cells.
    pub territory_size: usize,
    /// Hard cap on territories during growth.
    pub max_territories: usize,
    /// Minimum acceptable territory count after cleanup.
    pub min_territories: usize,
    /// Territories below this cell count are deleted during cleanup.
    pub min_territory_cells: usize,
    /// Extra starting armies dealt per territory on the map.
    pub extra_army_factor: u32,
}

impl Default for MapGenConfig {
    fn default() -> Self {
        MapGenConfig {
            territory_size: 8,
            max_territories: 32,
            min_territories: 24,
            min_territory_cells: 4,
            extra_army_factor: 2,
        }
    }
}

/// Errors from map generation. The generator never retries on its own; a
/// caller that wants a different outcome re-invokes with a different seed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapGenError {
    #[error("player count {0} outside supported range {MIN_PLAYERS}..={MAX_PLAYERS}")]
    InvalidPlayerCount(u8),

    #[error("generated {count} territories, outside configured band {min}..={max}")]
    TerritoryCountOutOfRange {
        count: usize,
        min: usize,
        max: usize,
    },
}

/// Generates a map with the default configuration.
///
/// `None` draws a seed from entropy; the effective seed is echoed in
/// [`GameMap::seed`] so the caller can persist it.
pub fn generate(seed: Option<u64>, player_count: u8) -> Result<GameMap, MapGenError> {
    generate_with(seed, player_count, &MapGenConfig::default())
}

/// Generates a map with an explicit configuration.
pub fn generate_with(
    seed: Option<u64>,
    player_count: u8,
    config: &MapGenConfig,
) -> Result<GameMap, MapGenError> {
    let mut rng = GameRng::new(seed);
    generate_with_rng(&mut rng, player_count, config)
}

/// Generates a map drawing from a caller-owned RNG, so a game engine can
/// keep consuming the same sequential source afterwards.
pub fn generate_with_rng(
    rng: &mut GameRng,
    player_count: u8,
    config: &MapGenConfig,
) -> Result<GameMap, MapGenError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&(player_count as usize)) {
        return Err(MapGenError::InvalidPlayerCount(player_count));
    }

    let neighbors = build_neighbor_table();

    // Growth and cleanup.
    let (mut assigned, mut territory_cells) = growth::grow_territories(
        rng,
        &neighbors,
        config.territory_size,
        config.max_territories,
    );
    growth::fill_gaps(&mut assigned, &mut territory_cells, &neighbors);
    let territory_cells =
        growth::drop_small_territories(&mut assigned, territory_cells, config.min_territory_cells);

    let count = territory_cells.len();
    if count < config.min_territories || count > config.max_territories {
        return Err(MapGenError::TerritoryCountOutOfRange {
            count,
            min: config.min_territories,
            max: config.max_territories,
        });
    }

    // Geometry and adjacency passes.
    let adjacency = geometry::compute_adjacency(&assigned, &neighbors, count);
    let mut territories = Vec::with_capacity(count);
    for (tid, cells) in territory_cells.into_iter().enumerate() {
        let center = geometry::find_center(&cells, &assigned, &neighbors, tid);
        let border = geometry::trace_border(&cells, &assigned, &neighbors, tid);
        territories.push(Territory {
            id: tid,
            cells,
            center,
            owner: None,
            armies: 1,
            adjacent: adjacency[tid].clone(),
            border,
        });
    }

    // Ownership: shuffled round-robin keeps counts within one of each other.
    let mut deal_order: Vec<usize> = (0..count).collect();
    rng.shuffle(&mut deal_order);
    for (i, &tid) in deal_order.iter().enumerate() {
        territories[tid].owner = Some((i % player_count as usize) as u8);
    }

    // Starting armies: 1 everywhere (set at construction), then extra armies
    // dealt round-robin, each on a random under-cap territory of the player.
    let extra = count as u32 * config.extra_army_factor;
    for i in 0..extra {
        let player = (i % u32::from(player_count)) as u8;
        let eligible: Vec<usize> = territories
            .iter()
            .filter(|t| t.owner == Some(player) && t.armies < MAX_ARMIES)
            .map(|t| t.id)
            .collect();
        if eligible.is_empty() {
            continue;
        }
        let tid = eligible[rng.pick(eligible.len())];
        territories[tid].add_armies(1);
    }

    log::debug!(
        "generated map: seed={} players={} territories={}",
        rng.seed(),
        player_count,
        count
    );

    Ok(GameMap {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
        cell_territory: assigned,
        neighbors,
        territories,
        player_count,
        seed: rng.seed(),
    })
}
