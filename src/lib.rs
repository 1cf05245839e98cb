// Domain layer - grid, transition rule, patterns
pub mod domain;

// Application layer - driver, config, background ticking
pub mod application;

// Presentation layer - macroquad widgets, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, Pattern, Topology, presets};
pub use application::{Scheduler, SimulationConfig, SimulationDriver};
pub use ui::Button;
