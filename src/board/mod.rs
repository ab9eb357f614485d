//! Board representation and game-state types.
//!
//! Contains the hex grid math, the territory arena, the generated map
//! container, and the overall game state.

pub mod grid;
pub mod map;
pub mod state;
pub mod territory;

pub use grid::{
    build_neighbor_table, cell_col, cell_index, cell_row, neighbor, Direction, ALL_DIRECTIONS,
    CELL_COUNT, GRID_HEIGHT, GRID_WIDTH,
};
pub use map::{adjacency_is_symmetric, GameMap};
pub use state::{GamePhase, GameState, PlayerState};
pub use territory::{
    PlayerId, Territory, TerritoryId, MAX_ARMIES, MAX_PLAYERS, MIN_PLAYERS,
};
