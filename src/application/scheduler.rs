//! Background ticker for running a driver off the UI thread.
//!
//! Ticks and edits serialize on one mutex, so a reader holding the lock
//! always sees a complete grid.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{debug, warn};

use super::SimulationDriver;
use crate::domain::Grid;

pub type SharedDriver = Arc<Mutex<SimulationDriver>>;

/// Wrap a driver for use with [`Scheduler`]
pub fn shared(driver: SimulationDriver) -> SharedDriver {
    Arc::new(Mutex::new(driver))
}

/// Clone of the current grid, taken under the lock
pub fn snapshot(driver: &SharedDriver) -> Option<Grid> {
    match driver.lock() {
        Ok(guard) => Some(guard.grid().clone()),
        Err(_) => {
            warn!("driver lock poisoned, no snapshot");
            None
        }
    }
}

/// Owns the ticker thread. Dropping it stops the thread.
pub struct Scheduler {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Start a thread that calls [`SimulationDriver::tick`] once per tick interval
    pub fn spawn(driver: SharedDriver) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        let handle = thread::spawn(move || run(&driver, &flag));
        debug!("scheduler started");
        Self {
            shutdown,
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the ticker and wait for it to exit
    pub fn shutdown(mut self) {
        self.stop_thread();
    }

    fn stop_thread(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        self.shutdown.store(true, Ordering::Release);
        handle.thread().unpark();
        if handle.join().is_err() {
            warn!("scheduler thread panicked");
        }
        debug!("scheduler stopped");
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop_thread();
    }
}

fn run(driver: &SharedDriver, shutdown: &AtomicBool) {
    loop {
        let interval = match driver.lock() {
            Ok(guard) => guard.tick_interval(),
            Err(_) => {
                warn!("driver lock poisoned, stopping scheduler");
                return;
            }
        };

        // park_timeout may wake early; sleep out the remainder
        let deadline = Instant::now() + interval;
        loop {
            if shutdown.load(Ordering::Acquire) {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::park_timeout(deadline - now);
        }

        match driver.lock() {
            Ok(mut guard) => {
                guard.tick();
            }
            Err(_) => {
                warn!("driver lock poisoned, stopping scheduler");
                return;
            }
        }
    }
}
