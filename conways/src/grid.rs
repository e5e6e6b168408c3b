//! Square toroidal grid for Conway's Game of Life, stored as a flat row-major
//! sequence of cells.
use std::fmt;

/// Row-major index of `(row, col)` on a grid of `side` columns.
///
/// The caller guarantees `row < side` and `col < side`.
pub fn encode(side: usize, row: usize, col: usize) -> usize {
    row * side + col
}

/// Inverse of [`encode`]. The caller guarantees `index < side * side`.
pub fn decode(side: usize, index: usize) -> (usize, usize) {
    (index / side, index % side)
}

/// The three candidates for one axis: previous, same, next, wrapped onto `0..side`.
fn axis_candidates(side: usize, value: usize) -> [usize; 3] {
    [(value + side - 1) % side, value, (value + 1) % side]
}

/// Indices of the 8 Moore neighbours of `(row, col)` with toroidal wrapping.
///
/// Order is row-candidate major, col-candidate minor, skipping the centre of
/// the 3x3 block. With `side >= 3` all 8 are distinct. Below that the modular
/// arithmetic folds candidates together: on `side == 2` each neighbour shows
/// up more than once and on `side == 1` the cell is its own neighbour 8 times.
pub fn neighbours(side: usize, row: usize, col: usize) -> Vec<usize> {
    let rows = axis_candidates(side, row);
    let cols = axis_candidates(side, col);

    let mut out = Vec::with_capacity(8);
    for (i, &r) in rows.iter().enumerate() {
        for (j, &c) in cols.iter().enumerate() {
            if i == 1 && j == 1 {
                continue;
            }
            out.push(encode(side, r, c));
        }
    }
    out
}

/// One generation. Cells can only be built through the constructors below, so
/// `cells.len() == side * side` always holds. Edits return a new `Grid`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid. `side` must be positive.
    pub fn new(side: usize) -> Self {
        assert!(side > 0, "grid side must be positive");
        Self {
            side,
            cells: vec![false; side * side],
        }
    }

    /// Create a grid with exactly the listed `(row, col)` cells alive.
    pub fn from_live(side: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(side);
        for &(row, col) in live {
            let idx = grid.index(row, col);
            grid.cells[idx] = true;
        }
        grid
    }

    pub(crate) fn from_cells(side: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), side * side);
        Self { side, cells }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.side && col < self.side,
            "cell ({row}, {col}) outside grid of side {}",
            self.side
        );
        encode(self.side, row, col)
    }

    /// State of the cell at a flat index. Out-of-range indices read as dead.
    pub fn get(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(self.index(row, col))
    }

    /// Copy of this grid with the single cell at `(row, col)` set to `alive`.
    pub fn set_cell(&self, row: usize, col: usize, alive: bool) -> Grid {
        let idx = self.index(row, col);
        let mut cells = self.cells.clone();
        cells[idx] = alive;
        Grid::from_cells(self.side, cells)
    }

    /// Copy of this grid with the cell at `(row, col)` flipped.
    pub fn toggle(&self, row: usize, col: usize) -> Grid {
        self.set_cell(row, col, !self.is_alive(row, col))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Toroidal neighbour indices of `(row, col)` on this grid.
    pub fn neighbours(&self, row: usize, col: usize) -> Vec<usize> {
        neighbours(self.side, row, col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.side) {
            let line: String = row
                .iter()
                .map(|&alive| if alive { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
