use super::{Grid, GridError};

/// A named arrangement of live cells that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) relative to the top-left corner
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// New grid with this pattern's cells set alive, top-left at `(row, col)`.
    /// Existing live cells are kept. Fails without applying anything if the
    /// pattern does not fit.
    pub fn stamp(&self, grid: &Grid, row: usize, col: usize) -> Result<Grid, GridError> {
        let (rows, cols) = grid.dimensions();
        let coords = self
            .cells
            .iter()
            .map(|&(r, c)| match (row.checked_add(r), col.checked_add(c)) {
                (Some(r), Some(c)) => Ok((r, c)),
                _ => Err(GridError::OutOfBounds { row, col, rows, cols }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        grid.with_cells_alive(coords)
    }
}

/// Classic patterns
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - methuselah that stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider(), lwss(), r_pentomino()]
    }
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use super::*;

    fn stamped(pattern: &Pattern, rows: usize, cols: usize, at: (usize, usize)) -> Grid {
        pattern.stamp(&Grid::new(rows, cols).unwrap(), at.0, at.1).unwrap()
    }

    fn nth_step(grid: &Grid, n: usize) -> Grid {
        (0..n).fold(grid.clone(), |g, _| g.step())
    }

    #[test]
    fn test_bounding_box() {
        let glider = glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
        assert_eq!((blinker().rows, blinker().cols), (1, 3));
        assert_eq!((lwss().rows, lwss().cols), (4, 5));
    }

    #[test]
    fn test_still_life_and_oscillators() {
        let block = stamped(&block(), 6, 6, (2, 2));
        assert_eq!(block.step(), block);

        for pattern in [blinker(), toad(), beacon()] {
            let grid = stamped(&pattern, 10, 10, (3, 3));
            assert_ne!(grid.step(), grid, "{} should change", pattern.name);
            assert_eq!(nth_step(&grid, 2), grid, "{} should have period 2", pattern.name);
        }
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let start = stamped(&glider(), 10, 10, (1, 1));
        let expected = stamped(&glider(), 10, 10, (2, 2));
        assert_eq!(nth_step(&start, 4), expected);
    }

    #[test]
    fn test_stamp_keeps_existing_cells() {
        let grid = Grid::with_alive(5, 5, &[(4, 4)]).unwrap();
        let grid = block().stamp(&grid, 0, 0).unwrap();
        assert_eq!(grid.population(), 5);
        assert_eq!(grid.is_alive(4, 4), Ok(true));
    }

    #[test]
    fn test_stamp_rejects_overhang() {
        let grid = Grid::new(5, 5).unwrap();
        let err = glider().stamp(&grid, 3, 0).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { row: 5, .. }));

        let err = glider().stamp(&grid, 0, usize::MAX).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds { row: 0, col: usize::MAX, rows: 5, cols: 5 });
        assert!(block().stamp(&grid, usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
