//! Constructors for initial grids.

use super::grid::validate_dimensions;
use super::{Cell, Grid, GridError};
use rand::Rng;

/// Chance of a cell starting alive when reseeding
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.3;

/// Every cell dead
pub fn create_empty(rows: usize, cols: usize) -> Result<Grid, GridError> {
    Grid::new(rows, cols)
}

/// Each cell independently alive with `alive_probability`, drawing from `rng`.
///
/// Arguments are validated before any entropy is consumed.
pub fn create_random<R: Rng>(
    rows: usize,
    cols: usize,
    alive_probability: f64,
    rng: &mut R,
) -> Result<Grid, GridError> {
    validate_dimensions(rows, cols)?;
    validate_probability(alive_probability)?;

    let cells = (0..rows * cols)
        .map(|_| Cell::from(rng.random_bool(alive_probability)))
        .collect();
    Ok(Grid::from_cells(rows, cols, cells))
}

/// [`create_random`] using the thread-local generator
pub fn create_random_default(
    rows: usize,
    cols: usize,
    alive_probability: f64,
) -> Result<Grid, GridError> {
    create_random(rows, cols, alive_probability, &mut rand::rng())
}

pub(crate) fn validate_probability(p: f64) -> Result<(), GridError> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GridError::InvalidProbability(p))
    }
}
