use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::config::{MIN_TICK_INTERVAL, SimulationConfig};
use crate::domain::{Grid, GridError, Pattern, create_empty, create_random};

/// SimulationDriver owns the current grid and the run/stop state.
///
/// It is the only mutable piece of the system: every transition swaps
/// `grid` for a new value produced by the pure domain functions.
pub struct SimulationDriver {
    config: SimulationConfig,
    grid: Grid,
    running: bool,
    generation: u64,
    elapsed: Duration,
    rng: StdRng,
}

impl SimulationDriver {
    /// Create a stopped driver holding an empty grid
    pub fn new(mut config: SimulationConfig) -> Result<Self, GridError> {
        config.validate()?;
        config.tick_interval = config.tick_interval.max(MIN_TICK_INTERVAL);

        let grid = create_empty(config.rows, config.cols)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(
            rows = config.rows,
            cols = config.cols,
            topology = ?config.topology,
            tick_ms = config.tick_interval.as_millis() as u64,
            "simulation created"
        );

        Ok(Self {
            config,
            grid,
            running: false,
            generation: 0,
            elapsed: Duration::ZERO,
            rng,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The current generation
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.config.tick_interval = interval.max(MIN_TICK_INTERVAL);
        debug!(tick_ms = self.config.tick_interval.as_millis() as u64, "tick interval changed");
    }

    pub fn start(&mut self) {
        if !self.running {
            info!(generation = self.generation, "simulation started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            info!(generation = self.generation, "simulation stopped");
        }
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Compute one generation regardless of the running state
    pub fn advance(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.grid = if rows * cols >= self.config.parallel_threshold {
            self.grid.step_parallel(self.config.topology)
        } else {
            self.grid.step_with(self.config.topology)
        };
        self.generation += 1;
        debug!(generation = self.generation, population = self.grid.population(), "advanced");
    }

    /// One scheduler tick: advances once while running, otherwise does nothing.
    /// Returns whether a generation was produced.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.advance();
        true
    }

    /// Frame-driven cadence. Accumulates `delta` and ticks once the
    /// configured interval has passed; at most one generation per call.
    /// Overshoot carries into the next interval unless a whole interval
    /// or more was missed, in which case the backlog is dropped.
    pub fn update(&mut self, delta: Duration) -> bool {
        if !self.running {
            return false;
        }

        let interval = self.config.tick_interval;
        self.elapsed += delta;
        if self.elapsed < interval {
            return false;
        }
        let carry = self.elapsed - interval;
        self.elapsed = if carry < interval { carry } else { Duration::ZERO };
        self.tick()
    }

    /// Flip one cell (user click)
    pub fn edit(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.grid = self.grid.toggle(row, col)?;
        Ok(())
    }

    /// Stamp a pattern with its top-left corner at `(row, col)`
    pub fn place(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<(), GridError> {
        self.grid = pattern.stamp(&self.grid, row, col)?;
        info!(pattern = pattern.name, row, col, "pattern placed");
        Ok(())
    }

    /// Replace the grid with a random one and reset the generation counter
    pub fn reseed(&mut self) -> Result<(), GridError> {
        let (rows, cols) = self.grid.dimensions();
        self.grid = create_random(rows, cols, self.config.alive_probability, &mut self.rng)?;
        self.generation = 0;
        info!(population = self.grid.population(), "grid reseeded");
        Ok(())
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) -> Result<(), GridError> {
        let (rows, cols) = self.grid.dimensions();
        self.grid = create_empty(rows, cols)?;
        self.generation = 0;
        info!("grid cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Topology, presets};

    fn driver() -> SimulationDriver {
        SimulationDriver::new(SimulationConfig::default().with_size(5, 5).with_seed(11)).unwrap()
    }

    fn with_blinker(driver: &mut SimulationDriver) {
        driver.place(&presets::blinker(), 2, 1).unwrap();
    }

    #[test]
    fn test_starts_stopped_and_empty() {
        let driver = driver();
        assert!(!driver.is_running());
        assert_eq!(driver.generation(), 0);
        assert_eq!(driver.population(), 0);
        assert_eq!(driver.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig::default().with_size(0, 3);
        assert!(SimulationDriver::new(config).is_err());
    }

    #[test]
    fn test_start_stop_transitions() {
        let mut driver = driver();
        driver.start();
        assert!(driver.is_running());
        driver.start();
        assert!(driver.is_running());
        driver.stop();
        assert!(!driver.is_running());
        driver.toggle_running();
        assert!(driver.is_running());
    }

    #[test]
    fn test_tick_only_when_running() {
        let mut driver = driver();
        with_blinker(&mut driver);
        let initial = driver.grid().clone();

        assert!(!driver.tick());
        assert_eq!(driver.grid(), &initial);
        assert_eq!(driver.generation(), 0);

        driver.start();
        assert!(driver.tick());
        assert_eq!(driver.generation(), 1);
        assert_eq!(driver.grid().alive_cells().collect::<Vec<_>>(), vec![(1, 2), (2, 2), (3, 2)]);
        assert!(driver.is_running());
    }

    #[test]
    fn test_advance_while_stopped() {
        let mut driver = driver();
        with_blinker(&mut driver);
        let initial = driver.grid().clone();
        driver.advance();
        driver.advance();
        assert_eq!(driver.grid(), &initial);
        assert_eq!(driver.generation(), 2);
        assert!(!driver.is_running());
    }

    #[test]
    fn test_update_follows_interval() {
        let mut driver = driver();
        with_blinker(&mut driver);
        driver.start();

        assert!(!driver.update(Duration::from_millis(60)));
        assert!(driver.update(Duration::from_millis(60)));
        assert_eq!(driver.generation(), 1);
        // a long frame still yields a single generation, with no backlog
        assert!(driver.update(Duration::from_secs(2)));
        assert_eq!(driver.generation(), 2);
        assert!(!driver.update(Duration::from_millis(60)));
        assert_eq!(driver.generation(), 2);
    }

    #[test]
    fn test_update_keeps_cadence_at_frame_rate() {
        let mut driver = driver();
        driver.start();

        // 60 frames of ~16.7 ms is one second, i.e. ten 100 ms ticks
        let frame = Duration::from_micros(16_667);
        let ticks = (0..60).filter(|_| driver.update(frame)).count();
        assert_eq!(ticks, 10);
    }

    #[test]
    fn test_update_ignored_when_stopped() {
        let mut driver = driver();
        assert!(!driver.update(Duration::from_secs(1)));
        assert_eq!(driver.generation(), 0);
    }

    #[test]
    fn test_edits_do_not_change_running_state() {
        let mut driver = driver();
        driver.edit(0, 0).unwrap();
        assert!(!driver.is_running());
        assert_eq!(driver.grid().is_alive(0, 0), Ok(true));

        driver.start();
        driver.edit(0, 0).unwrap();
        driver.reseed().unwrap();
        driver.clear().unwrap();
        assert!(driver.is_running());
        assert_eq!(driver.population(), 0);
    }

    #[test]
    fn test_edit_out_of_bounds_leaves_grid() {
        let mut driver = driver();
        with_blinker(&mut driver);
        let before = driver.grid().clone();
        assert!(driver.edit(5, 0).is_err());
        assert!(driver.place(&presets::glider(), 4, 4).is_err());
        assert_eq!(driver.grid(), &before);
    }

    #[test]
    fn test_reseed_resets_generation_and_is_reproducible() {
        let config = SimulationConfig::default().with_seed(99);
        let mut a = SimulationDriver::new(config.clone()).unwrap();
        let mut b = SimulationDriver::new(config).unwrap();
        a.advance();
        a.reseed().unwrap();
        b.reseed().unwrap();
        assert_eq!(a.generation(), 0);
        assert_eq!(a.grid(), b.grid());
        assert!(a.population() > 0);
    }

    #[test]
    fn test_zero_probability_reseed_is_empty() {
        let config = SimulationConfig::default().with_alive_probability(0.0);
        let mut driver = SimulationDriver::new(config).unwrap();
        driver.reseed().unwrap();
        assert_eq!(driver.population(), 0);
    }

    #[test]
    fn test_parallel_threshold_gives_same_result() {
        let base = SimulationConfig::default().with_size(40, 40).with_seed(3);
        let serial_config = base.clone().with_parallel_threshold(usize::MAX);
        let mut serial = SimulationDriver::new(serial_config).unwrap();
        let mut parallel = SimulationDriver::new(base.with_parallel_threshold(1)).unwrap();
        serial.reseed().unwrap();
        parallel.reseed().unwrap();
        for _ in 0..5 {
            serial.advance();
            parallel.advance();
        }
        assert_eq!(serial.grid(), parallel.grid());
    }

    #[test]
    fn test_toroidal_config_wraps() {
        let config = SimulationConfig::default().with_size(5, 5).with_topology(Topology::Toroidal);
        let mut driver = SimulationDriver::new(config).unwrap();
        for col in [4, 0, 1] {
            driver.edit(0, col).unwrap();
        }
        driver.advance();
        assert_eq!(driver.grid().alive_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 0), (4, 0)]);
    }

    #[test]
    fn test_tick_interval_has_floor() {
        let mut driver = driver();
        driver.set_tick_interval(Duration::ZERO);
        assert_eq!(driver.tick_interval(), MIN_TICK_INTERVAL);
    }
}
