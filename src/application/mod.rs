mod config;
mod driver;
pub mod scheduler;

pub use config::{DEFAULT_TICK_INTERVAL, MIN_TICK_INTERVAL, SimulationConfig};
pub use driver::SimulationDriver;
pub use scheduler::{Scheduler, SharedDriver};
