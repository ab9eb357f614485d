//! Hex grid coordinate math.
//!
//! The board is a fixed 28x32 grid of hexagonal cells in odd-row offset
//! layout: odd rows are shifted half a cell to the right, giving every
//! interior cell exactly six neighbors. Cells are identified by a row-major
//! integer index; all neighbor lookups are pure functions of that index.

use serde::{Deserialize, Serialize};

/// Grid width in cells.
pub const GRID_WIDTH: usize = 28;

/// Grid height in cells.
pub const GRID_HEIGHT: usize = 32;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;

/// One of the six hex edge directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    East = 0,
    SouthEast = 1,
    SouthWest = 2,
    West = 3,
    NorthWest = 4,
    NorthEast = 5,
}

/// All six directions in clockwise order starting from East.
pub const ALL_DIRECTIONS: [Direction; 6] = [
    Direction::East,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
    Direction::NorthEast,
];

impl Direction {
    /// Returns the direction pointing back across the same edge.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
        }
    }

    /// Returns the (col, row) offset for this direction from a cell in the
    /// given row. Odd rows are shifted right, so the diagonal offsets depend
    /// on row parity.
    const fn offset(self, row: usize) -> (i32, i32) {
        let odd = row % 2 == 1;
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::SouthEast => {
                if odd {
                    (1, 1)
                } else {
                    (0, 1)
                }
            }
            Direction::SouthWest => {
                if odd {
                    (0, 1)
                } else {
                    (-1, 1)
                }
            }
            Direction::NorthEast => {
                if odd {
                    (1, -1)
                } else {
                    (0, -1)
                }
            }
            Direction::NorthWest => {
                if odd {
                    (0, -1)
                } else {
                    (-1, -1)
                }
            }
        }
    }
}

/// Converts (col, row) coordinates to a cell index.
pub const fn cell_index(col: usize, row: usize) -> usize {
    row * GRID_WIDTH + col
}

/// Returns the column of a cell.
pub const fn cell_col(cell: usize) -> usize {
    cell % GRID_WIDTH
}

/// Returns the row of a cell.
pub const fn cell_row(cell: usize) -> usize {
    cell / GRID_WIDTH
}

/// Returns the neighboring cell in the given direction, or `None` at the
/// grid edge.
pub fn neighbor(cell: usize, dir: Direction) -> Option<usize> {
    let col = cell_col(cell) as i32;
    let row = cell_row(cell);
    let (dc, dr) = dir.offset(row);
    let nc = col + dc;
    let nr = row as i32 + dr;
    if nc < 0 || nc >= GRID_WIDTH as i32 || nr < 0 || nr >= GRID_HEIGHT as i32 {
        return None;
    }
    Some(cell_index(nc as usize, nr as usize))
}

/// Builds the per-cell neighbor table, indexed `[cell][direction]`.
pub fn build_neighbor_table() -> Vec<[Option<usize>; 6]> {
    let mut table = Vec::with_capacity(CELL_COUNT);
    for cell in 0..CELL_COUNT {
        let mut entry = [None; 6];
        for dir in ALL_DIRECTIONS {
            entry[dir as usize] = neighbor(cell, dir);
        }
        table.push(entry);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                let cell = cell_index(col, row);
                assert_eq!(cell_col(cell), col);
                assert_eq!(cell_row(cell), row);
            }
        }
    }

    #[test]
    fn neighbors_are_symmetric() {
        for cell in 0..CELL_COUNT {
            for dir in ALL_DIRECTIONS {
                if let Some(n) = neighbor(cell, dir) {
                    assert_eq!(
                        neighbor(n, dir.opposite()),
                        Some(cell),
                        "cell {} dir {:?} neighbor {} does not point back",
                        cell,
                        dir,
                        n
                    );
                }
            }
        }
    }

    #[test]
    fn interior_cells_have_six_neighbors() {
        let cell = cell_index(14, 15);
        let count = ALL_DIRECTIONS
            .iter()
            .filter(|d| neighbor(cell, **d).is_some())
            .count();
        assert_eq!(count, 6);
    }

    #[test]
    fn corner_cells_are_clipped() {
        // Top-left corner (even row, not shifted): only East and SouthEast
        // stay on the grid.
        let tl = cell_index(0, 0);
        assert_eq!(neighbor(tl, Direction::East), Some(cell_index(1, 0)));
        assert_eq!(neighbor(tl, Direction::SouthEast), Some(cell_index(0, 1)));
        assert_eq!(neighbor(tl, Direction::West), None);
        assert_eq!(neighbor(tl, Direction::SouthWest), None);
        assert_eq!(neighbor(tl, Direction::NorthWest), None);
        assert_eq!(neighbor(tl, Direction::NorthEast), None);

        // Bottom-right corner (odd row, shifted right): everything east or
        // south is off-grid.
        let br = cell_index(GRID_WIDTH - 1, GRID_HEIGHT - 1);
        assert_eq!(neighbor(br, Direction::East), None);
        assert_eq!(neighbor(br, Direction::SouthEast), None);
        assert_eq!(neighbor(br, Direction::SouthWest), None);
        assert_eq!(
            neighbor(br, Direction::West),
            Some(cell_index(GRID_WIDTH - 2, GRID_HEIGHT - 1))
        );
    }

    #[test]
    fn parity_affects_diagonals() {
        // Even row: SouthEast keeps the column.
        let even = cell_index(5, 4);
        assert_eq!(neighbor(even, Direction::SouthEast), Some(cell_index(5, 5)));
        assert_eq!(neighbor(even, Direction::SouthWest), Some(cell_index(4, 5)));
        // Odd row: SouthEast advances the column.
        let odd = cell_index(5, 5);
        assert_eq!(neighbor(odd, Direction::SouthEast), Some(cell_index(6, 6)));
        assert_eq!(neighbor(odd, Direction::SouthWest), Some(cell_index(5, 6)));
    }

    #[test]
    fn neighbor_table_matches_direct_lookup() {
        let table = build_neighbor_table();
        assert_eq!(table.len(), CELL_COUNT);
        for cell in (0..CELL_COUNT).step_by(37) {
            for dir in ALL_DIRECTIONS {
                assert_eq!(table[cell][dir as usize], neighbor(cell, dir));
            }
        }
    }
}
