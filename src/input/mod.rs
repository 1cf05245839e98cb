use std::time::Duration;

use macroquad::prelude::*;
use tracing::warn;

use crate::application::SimulationDriver;
use crate::domain::{GridError, presets};
use crate::ui::{Action, Button, cell_at, grid_area};

const SPEED_STEP: Duration = Duration::from_millis(20);
const SLOWEST_TICK: Duration = Duration::from_secs(2);

type DriverAction = fn(&mut SimulationDriver) -> Result<(), GridError>;

fn apply(driver: &mut SimulationDriver, action: DriverAction) {
    if let Err(err) = action(driver) {
        warn!(%err, "input rejected");
    }
}

fn perform(driver: &mut SimulationDriver, action: Action) {
    match action {
        Action::StartStop => driver.toggle_running(),
        Action::Step => driver.advance(),
        Action::Random => apply(driver, SimulationDriver::reseed),
        Action::Clear => apply(driver, SimulationDriver::clear),
    }
}

fn faster(driver: &mut SimulationDriver) -> Result<(), GridError> {
    let interval = driver.tick_interval().saturating_sub(SPEED_STEP);
    driver.set_tick_interval(interval.max(SPEED_STEP));
    Ok(())
}

fn slower(driver: &mut SimulationDriver) -> Result<(), GridError> {
    let interval = driver.tick_interval() + SPEED_STEP;
    driver.set_tick_interval(interval.min(SLOWEST_TICK));
    Ok(())
}

/// Keyboard shortcuts for the panel actions and speed
pub fn process_keyboard_input(driver: &mut SimulationDriver) {
    let bindings = [
        (KeyCode::Space, Action::StartStop),
        (KeyCode::N, Action::Step),
        (KeyCode::R, Action::Random),
        (KeyCode::C, Action::Clear),
    ];
    for (key, action) in bindings {
        if is_key_pressed(key) {
            perform(driver, action);
        }
    }

    let speed: [(KeyCode, DriverAction); 2] = [(KeyCode::Up, faster), (KeyCode::Down, slower)];
    for (key, action) in speed {
        if is_key_pressed(key) {
            apply(driver, action);
        }
    }
}

pub fn process_button_clicks(
    driver: &mut SimulationDriver,
    buttons: &[(Action, Button)],
    mouse_pos: (f32, f32),
) {
    for (action, button) in buttons {
        if button.is_clicked(mouse_pos) {
            perform(driver, *action);
        }
    }
}

/// Toggle the cell under a left click. Clicks off the grid never reach the driver.
pub fn handle_cell_click(driver: &mut SimulationDriver, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let Some((row, col)) = cell_at(mouse_pos, grid_area(), driver.grid().dimensions()) else {
        return;
    };
    if let Err(err) = driver.edit(row, col) {
        warn!(%err, "cell edit rejected");
    }
}

/// Number keys stamp the matching preset with its top-left at the cursor
pub fn handle_pattern_keys(driver: &mut SimulationDriver, mouse_pos: (f32, f32)) {
    const KEYS: [KeyCode; 7] = [
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
        KeyCode::Key6,
        KeyCode::Key7,
    ];

    let Some(idx) = KEYS.iter().position(|&key| is_key_pressed(key)) else {
        return;
    };
    let Some(pattern) = presets::all_patterns().into_iter().nth(idx) else {
        return;
    };
    let Some((row, col)) = cell_at(mouse_pos, grid_area(), driver.grid().dimensions()) else {
        return;
    };
    if let Err(err) = driver.place(&pattern, row, col) {
        warn!(%err, pattern = pattern.name, "pattern does not fit");
    }
}
