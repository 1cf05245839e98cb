use std::time::Duration;

use crate::domain::{DEFAULT_ALIVE_PROBABILITY, GridError, Topology, factory, validate_dimensions};

/// Tick cadence used when nothing else is configured
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Shortest cadence the driver accepts
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Settings for a [`SimulationDriver`](super::SimulationDriver).
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    /// Chance of a cell starting alive on reseed
    pub alive_probability: f64,
    pub tick_interval: Duration,
    pub topology: Topology,
    /// Fixed RNG seed for reproducible reseeds; `None` uses OS entropy
    pub seed: Option<u64>,
    /// Grids with at least this many cells are stepped with rayon
    pub parallel_threshold: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            tick_interval: DEFAULT_TICK_INTERVAL,
            topology: Topology::Bounded,
            seed: None,
            parallel_threshold: 250_000,
        }
    }
}

impl SimulationConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_alive_probability(mut self, alive_probability: f64) -> Self {
        self.alive_probability = alive_probability;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    /// Check the grid size and seed probability
    pub fn validate(&self) -> Result<(), GridError> {
        validate_dimensions(self.rows, self.cols)?;
        factory::validate_probability(self.alive_probability)
    }
}
