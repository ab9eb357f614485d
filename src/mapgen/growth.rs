//! Percolation growth and region cleanup.
//!
//! The grid is carved into territories by rank-ordered percolation: every
//! cell gets a rank from one seeded shuffle, and every choice during growth
//! (seed selection, expansion step) takes the lowest-ranked eligible cell.
//! The shuffle rank is the sole tie-break, which makes the whole pass a pure
//! function of the RNG seed.

use crate::board::TerritoryId;
use crate::rng::GameRng;

/// Returns the lowest-ranked cell from an iterator, or `None` if empty.
fn lowest_rank(rank: &[usize], cells: impl Iterator<Item = usize>) -> Option<usize> {
    cells.min_by_key(|c| rank[*c])
}

/// Grows territories over the grid until the territory cap is reached or no
/// seed candidates remain.
///
/// Each territory grows in two phases: directed expansion along the
/// lowest-rank frontier until `territory_size` cells are claimed, then
/// absorption of the whole remaining frontier so no thin unclaimed slivers
/// are left behind. Neighbors of absorbed cells become seed candidates for
/// later territories.
///
/// Returns the cell assignment and the per-territory cell lists.
pub fn grow_territories(
    rng: &mut GameRng,
    neighbors: &[[Option<usize>; 6]],
    territory_size: usize,
    max_territories: usize,
) -> (Vec<Option<TerritoryId>>, Vec<Vec<usize>>) {
    let cell_count = neighbors.len();

    let mut order: Vec<usize> = (0..cell_count).collect();
    rng.shuffle(&mut order);
    let mut rank = vec![0usize; cell_count];
    for (pos, cell) in order.iter().enumerate() {
        rank[*cell] = pos;
    }

    let mut assigned: Vec<Option<TerritoryId>> = vec![None; cell_count];
    let mut seed_candidate = vec![false; cell_count];
    let mut frontier = vec![false; cell_count];
    let mut frontier_list: Vec<usize> = Vec::new();
    let mut territory_cells: Vec<Vec<usize>> = Vec::new();

    while territory_cells.len() < max_territories {
        let seed = if territory_cells.is_empty() {
            // No territory exists yet, so the candidate set is empty; start
            // from the lowest-ranked cell on the board.
            lowest_rank(&rank, (0..cell_count).filter(|c| assigned[*c].is_none()))
        } else {
            lowest_rank(
                &rank,
                (0..cell_count).filter(|c| seed_candidate[*c] && assigned[*c].is_none()),
            )
        };
        let Some(seed) = seed else {
            break;
        };

        let tid = territory_cells.len();
        let mut cells = Vec::new();
        frontier_list.clear();

        // Phase 1: directed growth toward the target size.
        let mut current = seed;
        loop {
            assigned[current] = Some(tid);
            cells.push(current);
            for n in neighbors[current].iter().flatten() {
                if assigned[*n].is_none() && !frontier[*n] {
                    frontier[*n] = true;
                    frontier_list.push(*n);
                }
            }
            if cells.len() >= territory_size {
                break;
            }
            match lowest_rank(
                &rank,
                frontier_list.iter().copied().filter(|c| assigned[*c].is_none()),
            ) {
                Some(next) => current = next,
                None => break,
            }
        }

        // Phase 2: absorb the remaining frontier and mark its neighborhood
        // as future seed candidates.
        for i in 0..frontier_list.len() {
            let cell = frontier_list[i];
            frontier[cell] = false;
            if assigned[cell].is_some() {
                continue;
            }
            assigned[cell] = Some(tid);
            cells.push(cell);
            for n in neighbors[cell].iter().flatten() {
                if assigned[*n].is_none() {
                    seed_candidate[*n] = true;
                }
            }
        }

        territory_cells.push(cells);
    }

    (assigned, territory_cells)
}

/// Fills unassigned cells whose neighbors are all assigned into the
/// territory holding the majority of those neighbors (ties to the lowest
/// territory id). Single pass; fills are decided against the pre-pass
/// assignment.
pub fn fill_gaps(
    assigned: &mut [Option<TerritoryId>],
    territory_cells: &mut [Vec<usize>],
    neighbors: &[[Option<usize>; 6]],
) {
    let mut fills: Vec<(usize, TerritoryId)> = Vec::new();

    for cell in 0..assigned.len() {
        if assigned[cell].is_some() {
            continue;
        }
        let mut counts = vec![0usize; territory_cells.len()];
        let mut surrounded = true;
        for n in neighbors[cell].iter().flatten() {
            match assigned[*n] {
                Some(tid) => counts[tid] += 1,
                None => {
                    surrounded = false;
                    break;
                }
            }
        }
        if !surrounded {
            continue;
        }
        let winner = counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .min_by_key(|(tid, count)| (std::cmp::Reverse(**count), *tid))
            .map(|(tid, _)| tid);
        if let Some(tid) = winner {
            fills.push((cell, tid));
        }
    }

    for (cell, tid) in fills {
        assigned[cell] = Some(tid);
        territory_cells[tid].push(cell);
    }
}

/// Deletes territories below the minimum cell count (their cells revert to
/// unassigned water) and renumbers survivors densely from 0.
pub fn drop_small_territories(
    assigned: &mut [Option<TerritoryId>],
    territory_cells: Vec<Vec<usize>>,
    min_cells: usize,
) -> Vec<Vec<usize>> {
    let mut remap: Vec<Option<TerritoryId>> = vec![None; territory_cells.len()];
    let mut survivors: Vec<Vec<usize>> = Vec::new();

    for (tid, cells) in territory_cells.into_iter().enumerate() {
        if cells.len() >= min_cells {
            remap[tid] = Some(survivors.len());
            survivors.push(cells);
        }
    }

    for slot in assigned.iter_mut() {
        *slot = slot.and_then(|tid| remap[tid]);
    }

    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::build_neighbor_table;

    fn grow(seed: u64) -> (Vec<Option<TerritoryId>>, Vec<Vec<usize>>) {
        let neighbors = build_neighbor_table();
        let mut rng = GameRng::new(Some(seed));
        grow_territories(&mut rng, &neighbors, 8, 32)
    }

    #[test]
    fn growth_is_deterministic() {
        let (a_cells, a_terr) = grow(17);
        let (b_cells, b_terr) = grow(17);
        assert_eq!(a_cells, b_cells);
        assert_eq!(a_terr, b_terr);
    }

    #[test]
    fn growth_respects_territory_cap() {
        let (_, territories) = grow(1);
        assert!(territories.len() <= 32);
        assert!(!territories.is_empty());
    }

    #[test]
    fn assignment_matches_cell_lists() {
        let (assigned, territories) = grow(2);
        for (tid, cells) in territories.iter().enumerate() {
            assert!(!cells.is_empty());
            for &c in cells {
                assert_eq!(assigned[c], Some(tid));
            }
        }
        let listed: usize = territories.iter().map(|c| c.len()).sum();
        let assigned_count = assigned.iter().filter(|a| a.is_some()).count();
        assert_eq!(listed, assigned_count);
    }

    #[test]
    fn territories_are_contiguous() {
        let neighbors = build_neighbor_table();
        let (assigned, territories) = grow(3);
        for (tid, cells) in territories.iter().enumerate() {
            // Flood fill from the first cell must reach every member.
            let mut seen = vec![false; assigned.len()];
            let mut stack = vec![cells[0]];
            seen[cells[0]] = true;
            let mut reached = 0;
            while let Some(c) = stack.pop() {
                reached += 1;
                for n in neighbors[c].iter().flatten() {
                    if !seen[*n] && assigned[*n] == Some(tid) {
                        seen[*n] = true;
                        stack.push(*n);
                    }
                }
            }
            assert_eq!(reached, cells.len(), "territory {} is split", tid);
        }
    }

    #[test]
    fn fill_gaps_closes_surrounded_holes() {
        let neighbors = build_neighbor_table();
        let (mut assigned, mut territories) = grow(4);
        fill_gaps(&mut assigned, &mut territories, &neighbors);
        for cell in 0..assigned.len() {
            if assigned[cell].is_some() {
                continue;
            }
            let has_unassigned_neighbor = neighbors[cell]
                .iter()
                .flatten()
                .any(|n| assigned[*n].is_none());
            assert!(
                has_unassigned_neighbor,
                "cell {} is a surrounded hole after fill",
                cell
            );
        }
    }

    #[test]
    fn fill_gaps_prefers_majority_neighbor() {
        // Synthetic 3-cell neighborhood: cell 10 unassigned, surrounded by
        // territory 1 on most sides and territory 0 on one.
        let neighbors = build_neighbor_table();
        let mut assigned: Vec<Option<TerritoryId>> = vec![None; neighbors.len()];
        let hole = crate::board::cell_index(10, 10);
        let around: Vec<usize> = neighbors[hole].iter().flatten().copied().collect();
        assert_eq!(around.len(), 6);
        assigned[around[0]] = Some(0);
        for &n in &around[1..] {
            assigned[n] = Some(1);
        }
        let mut territory_cells = vec![vec![around[0]], around[1..].to_vec()];
        fill_gaps(&mut assigned, &mut territory_cells, &neighbors);
        assert_eq!(assigned[hole], Some(1));
        assert!(territory_cells[1].contains(&hole));
    }

    #[test]
    fn drop_small_renumbers_densely() {
        let mut assigned: Vec<Option<TerritoryId>> = vec![
            Some(0),
            Some(0),
            Some(1),
            Some(2),
            Some(2),
            Some(2),
            None,
        ];
        let cells = vec![vec![0, 1], vec![2], vec![3, 4, 5]];
        let survivors = drop_small_territories(&mut assigned, cells, 2);
        assert_eq!(survivors.len(), 2);
        assert_eq!(survivors[0], vec![0, 1]);
        assert_eq!(survivors[1], vec![3, 4, 5]);
        // Territory 1 became water; territory 2 renumbered to 1.
        assert_eq!(assigned[2], None);
        assert_eq!(assigned[3], Some(1));
    }
}
