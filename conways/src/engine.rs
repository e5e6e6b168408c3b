//! Generation stepping and replay.
use crate::grid::{decode, Grid};

/// Number of live toroidal neighbours of `(row, col)`, in `0..=8`.
pub fn count_live_neighbours(grid: &Grid, row: usize, col: usize) -> usize {
    grid.neighbours(row, col)
        .into_iter()
        .filter(|&n| grid.get(n))
        .count()
}

/// Conway's rules:
/// 1. Any live cell with 2-3 neighbours survives
/// 2. Any dead cell with exactly 3 neighbours becomes alive
/// 3. All other cells die or stay dead
pub fn transition_rule(alive: bool, live_neighbours: usize) -> bool {
    match (alive, live_neighbours) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death
    }
}

/// Compute the next generation. Every cell reads only from `grid`, never from
/// the generation being built.
pub fn step(grid: &Grid) -> Grid {
    let side = grid.side();
    let cells = (0..side * side)
        .map(|idx| {
            let (row, col) = decode(side, idx);
            transition_rule(grid.get(idx), count_live_neighbours(grid, row, col))
        })
        .collect();

    Grid::from_cells(side, cells)
}

/// Apply [`step`] `steps` times starting at `origin`.
pub fn replay(origin: &Grid, steps: usize) -> Grid {
    let mut grid = origin.clone();
    for _ in 0..steps {
        grid = step(&grid);
    }
    grid
}
