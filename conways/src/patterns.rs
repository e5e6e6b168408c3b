//! Predefined patterns for Conway's Game of Life

use crate::grid::Grid;

/// A named set of live cells, as `(row, col)` offsets from the pattern's
/// top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(rows, cols), &(r, c)| {
            (rows.max(r + 1), cols.max(c + 1))
        })
    }

    /// Copy of `grid` with this pattern's cells set alive, its top-left corner at
    /// `(row, col)`. Cells past an edge wrap around to the opposite side.
    pub fn place(&self, grid: &Grid, row: usize, col: usize) -> Grid {
        let side = grid.side();
        self.cells.iter().fold(grid.clone(), |acc, &(dr, dc)| {
            acc.set_cell((row + dr) % side, (col + dc) % side, true)
        })
    }
}

pub const PATTERNS: &[Pattern] = &[
    // Travels diagonally
    //  *
    //   *
    // ***
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    // Period 2
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    // Period 2
    //  ***
    // ***
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    // Period 2
    // **
    // *
    //    *
    //   **
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
    },
    // Period 3
    Pattern {
        name: "Pulsar",
        cells: &[
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    // Lightweight spaceship, travels horizontally
    // *  *
    //     *
    // *   *
    //  ****
    Pattern {
        name: "LWSS",
        cells: &[
            (0, 0), (0, 3),
            (1, 4),
            (2, 0), (2, 4),
            (3, 1), (3, 2), (3, 3), (3, 4),
        ],
    },
    // Period 15
    //   *    *
    // ** **** **
    //   *    *
    Pattern {
        name: "Pentadecathlon",
        cells: &[
            (0, 2), (0, 7),
            (1, 0), (1, 1), (1, 3), (1, 4), (1, 5), (1, 6), (1, 8), (1, 9),
            (2, 2), (2, 7),
        ],
    },
];

/// Look up a pattern by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
