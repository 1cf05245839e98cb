use super::{Cell, GridError};
use rayon::prelude::*;
use std::fmt;

/// Moore neighborhood as (row, col) offsets.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// How neighbor lookups treat positions past the edge of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Topology {
    /// Positions outside the grid are permanently dead.
    #[default]
    Bounded,
    /// Positions wrap around like a torus.
    Toroidal,
}

/// Grid is a fixed-size snapshot of cell states.
///
/// Cells live in a flat row-major buffer, so a grid can never have jagged
/// or missing rows. There is no public way to mutate a grid in place:
/// stepping and editing both return a new value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Build a grid from an already validated row-major buffer
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Create a grid where exactly the listed coordinates are alive
    pub fn with_alive(
        rows: usize,
        cols: usize,
        alive: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        Self::new(rows, cols)?.with_cells_alive(alive.iter().copied())
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at position, `None` when outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.checked_index(row, col).ok().map(|idx| self.cells[idx])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.checked_index(row, col).map(|idx| self.cells[idx].is_alive())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of live cells in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Count live neighbors, treating positions past the edge as dead
    pub fn count_neighbors(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.count_neighbors_with(Topology::Bounded, row, col)
    }

    pub fn count_neighbors_with(
        &self,
        topology: Topology,
        row: usize,
        col: usize,
    ) -> Result<u8, GridError> {
        self.checked_index(row, col)?;
        Ok(self.live_neighbors(topology, row, col))
    }

    /// Resolve one neighbor offset to a coordinate inside the grid
    fn neighbor(
        &self,
        topology: Topology,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
    ) -> Option<(usize, usize)> {
        let r = row as isize + dr;
        let c = col as isize + dc;
        match topology {
            Topology::Bounded => {
                let inside = (0..self.rows as isize).contains(&r)
                    && (0..self.cols as isize).contains(&c);
                inside.then(|| (r as usize, c as usize))
            }
            Topology::Toroidal => Some((
                r.rem_euclid(self.rows as isize) as usize,
                c.rem_euclid(self.cols as isize) as usize,
            )),
        }
    }

    /// Neighbor count for a coordinate already known to be in bounds
    fn live_neighbors(&self, topology: Topology, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&offset| self.neighbor(topology, row, col, offset))
            .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
            .count() as u8
    }

    fn next_cell(&self, topology: Topology, row: usize, col: usize) -> Cell {
        let neighbors = self.live_neighbors(topology, row, col);
        self.cells[self.index(row, col)].evolve(neighbors)
    }

    /// Next generation on a bounded grid
    pub fn step(&self) -> Self {
        self.step_with(Topology::Bounded)
    }

    /// Pure functional evolution - every count is taken from `self`,
    /// never from the partially built successor.
    pub fn step_with(&self, topology: Topology) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(topology, row, col))
            .collect();

        Self::from_cells(self.rows, self.cols, cells)
    }

    /// Same result as [`Grid::step_with`], one rayon task per row.
    /// Pays off once grids reach a few hundred thousand cells.
    pub fn step_parallel(&self, topology: Topology) -> Self {
        let mut cells = vec![Cell::Dead; self.cells.len()];
        cells
            .par_chunks_mut(self.cols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    *cell = self.next_cell(topology, row, col);
                }
            });

        Self::from_cells(self.rows, self.cols, cells)
    }

    /// Copy of this grid with one cell inverted
    pub fn toggle(&self, row: usize, col: usize) -> Result<Self, GridError> {
        let idx = self.checked_index(row, col)?;
        let mut cells = self.cells.clone();
        cells[idx] = cells[idx].toggle();
        Ok(Self::from_cells(self.rows, self.cols, cells))
    }

    /// Copy of this grid with every listed coordinate set alive.
    /// All coordinates are checked before anything is copied.
    pub(crate) fn with_cells_alive<I>(&self, coords: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let indices = coords
            .into_iter()
            .map(|(row, col)| self.checked_index(row, col))
            .collect::<Result<Vec<_>, _>>()?;

        let mut cells = self.cells.clone();
        for idx in indices {
            cells[idx] = Cell::Alive;
        }
        Ok(Self::from_cells(self.rows, self.cols, cells))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.chunks(self.cols).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in line {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Both sides positive and the cell count addressable by a `Vec`
pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    let addressable = rows
        .checked_mul(cols)
        .is_some_and(|cells| cells > 0 && cells <= isize::MAX as usize);
    if !addressable {
        return Err(GridError::InvalidDimension { rows, cols });
    }
    Ok(())
}

/// Live neighbors of `(row, col)` on a bounded grid
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8, GridError> {
    grid.count_neighbors(row, col)
}

pub fn count_neighbors_with(
    grid: &Grid,
    topology: Topology,
    row: usize,
    col: usize,
) -> Result<u8, GridError> {
    grid.count_neighbors_with(topology, row, col)
}

/// Next generation on a bounded grid
pub fn step(grid: &Grid) -> Grid {
    grid.step()
}

pub fn step_with(grid: &Grid, topology: Topology) -> Grid {
    grid.step_with(topology)
}

pub fn step_parallel(grid: &Grid, topology: Topology) -> Grid {
    grid.step_parallel(topology)
}

/// New grid equal to `grid` except `(row, col)` is inverted
pub fn toggle(grid: &Grid, row: usize, col: usize) -> Result<Grid, GridError> {
    grid.toggle(row, col)
}
