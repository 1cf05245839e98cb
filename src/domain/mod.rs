mod cell;
mod error;
mod grid;
mod patterns;
pub mod factory;

pub use cell::Cell;
pub(crate) use grid::validate_dimensions;
pub use error::GridError;
pub use grid::{
    Grid, Topology, count_neighbors, count_neighbors_with, step, step_parallel, step_with, toggle,
};
pub use factory::{DEFAULT_ALIVE_PROBABILITY, create_empty, create_random, create_random_default};
pub use patterns::{Pattern, presets};
