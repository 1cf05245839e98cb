use macroquad::prelude::*;

use crate::application::SimulationDriver;
use crate::domain::{Grid, presets};
use crate::ui::{Action, Button, PANEL_WIDTH, cell_size, grid_area, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every cell, with grid lines once cells are big enough to see them
pub fn draw_grid(grid: &Grid) {
    let size = cell_size(grid_area(), grid.dimensions());
    let draw_lines = size >= 4.0;

    for (row, col, cell) in grid.iter_cells() {
        let x = col as f32 * size;
        let y = row as f32 * size;
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, size, size, color);
        if draw_lines {
            draw_rectangle_lines(x, y, size, size, 1.0, LINE_COLOR);
        }
    }
}

/// Draw the side panel: buttons, stats, key help
pub fn draw_controls(
    driver: &SimulationDriver,
    buttons: &[(Action, Button)],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(25, 25, 30, 255));

    for (_, button) in buttons {
        button.draw(mouse_pos);
    }

    let (rows, cols) = driver.grid().dimensions();
    let mut y = 20.0 + buttons.len() as f32 * 50.0 + 20.0;
    let lines = [
        format!("Generation: {}", driver.generation()),
        format!("Population: {}", driver.population()),
        format!("Grid: {rows}x{cols}"),
        format!("Tick: {} ms", driver.tick_interval().as_millis()),
        format!("State: {}", if driver.is_running() { "running" } else { "stopped" }),
    ];
    for line in &lines {
        draw_text(line, px + 10.0, y, 18.0, WHITE);
        y += 22.0;
    }

    y += 10.0;
    let help = [
        "Click: toggle cell".to_string(),
        "Space: start/stop".to_string(),
        "N: step  R: random  C: clear".to_string(),
        "Up/Down: speed".to_string(),
    ];
    let patterns = presets::all_patterns()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}: {}", i + 1, p.name))
        .collect::<Vec<_>>();
    for line in help.iter().chain(patterns.iter()) {
        draw_text(line, px + 10.0, y, 16.0, GRAY);
        y += 18.0;
    }
}
