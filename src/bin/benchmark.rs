//! Serial vs rayon stepping across grid sizes

use std::time::Instant;

use conway_life::Topology;
use conway_life::domain::{DEFAULT_ALIVE_PROBABILITY, Grid, create_random};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn time_steps(grid: &Grid, generations: u32, step: impl Fn(&Grid) -> Grid) -> f64 {
    let mut grid = grid.clone();
    let start = Instant::now();
    for _ in 0..generations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / f64::from(generations)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sizes = [50, 100, 200, 500, 1000, 2000];
    let mut rng = StdRng::seed_from_u64(0x5eed);

    println!("{:>10} {:>14} {:>14} {:>9}", "size", "serial ms/gen", "rayon ms/gen", "speedup");
    for size in sizes {
        let grid = match create_random(size, size, DEFAULT_ALIVE_PROBABILITY, &mut rng) {
            Ok(grid) => grid,
            Err(err) => {
                tracing::error!(%err, size, "could not build grid");
                continue;
            }
        };
        let generations = if size >= 1000 { 5 } else { 50 };
        info!(size, generations, population = grid.population(), "benchmarking");

        let serial = time_steps(&grid, generations, |g| g.step_with(Topology::Bounded));
        let parallel = time_steps(&grid, generations, |g| g.step_parallel(Topology::Bounded));
        println!(
            "{:>10} {:>14.3} {:>14.3} {:>8.2}x",
            format!("{size}x{size}"),
            serial,
            parallel,
            serial / parallel
        );
    }
}
