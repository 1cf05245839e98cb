use std::time::Duration;

use conway_life::{SimulationConfig, SimulationDriver, input, rendering, ui};
use macroquad::prelude::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 700,
        window_height: 520,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut driver = match SimulationDriver::new(SimulationConfig::default()) {
        Ok(driver) => driver,
        Err(err) => {
            error!(%err, "invalid simulation config");
            return;
        }
    };

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(driver.is_running());

        input::process_button_clicks(&mut driver, &buttons, mouse_pos);
        input::process_keyboard_input(&mut driver);
        input::handle_cell_click(&mut driver, mouse_pos);
        input::handle_pattern_keys(&mut driver, mouse_pos);

        driver.update(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_grid(driver.grid());
        // rebuild so the Start/Stop label reflects this frame's input
        let buttons = ui::create_buttons(driver.is_running());
        rendering::draw_controls(&driver, &buttons, mouse_pos);

        next_frame().await;
    }
}
