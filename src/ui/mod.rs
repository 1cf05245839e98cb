mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const MAX_CELL_SIZE: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Size of the area left of the panel
pub fn grid_area() -> (f32, f32) {
    (screen_width() - PANEL_WIDTH, screen_height())
}

/// Side length of one cell so that a `rows` x `cols` grid fits in `area`
pub fn cell_size(area: (f32, f32), (rows, cols): (usize, usize)) -> f32 {
    let fit = (area.0 / cols as f32).min(area.1 / rows as f32);
    fit.clamp(1.0, MAX_CELL_SIZE)
}

/// Map a screen position to the grid cell under it.
/// Positions outside the drawn grid give `None`.
pub fn cell_at(
    mouse_pos: (f32, f32),
    area: (f32, f32),
    dims: (usize, usize),
) -> Option<(usize, usize)> {
    let (x, y) = mouse_pos;
    if x < 0.0 || y < 0.0 || x >= area.0 || y >= area.1 {
        return None;
    }
    let size = cell_size(area, dims);
    let (row, col) = ((y / size) as usize, (x / size) as usize);
    (row < dims.0 && col < dims.1).then_some((row, col))
}

/// What a panel button does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    StartStop,
    Step,
    Random,
    Clear,
}

pub const ACTIONS: [Action; 4] = [Action::StartStop, Action::Step, Action::Random, Action::Clear];

impl Action {
    pub fn label(self, running: bool) -> &'static str {
        match self {
            Action::StartStop if running => "Stop",
            Action::StartStop => "Start",
            Action::Step => "Step",
            Action::Random => "Random",
            Action::Clear => "Clear",
        }
    }
}

/// Panel buttons stacked from the top of the panel
pub fn create_buttons(running: bool) -> Vec<(Action, Button)> {
    let px = panel_x();
    ACTIONS
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let y = 20.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
            (action, Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, action.label(running)))
        })
        .collect()
}
