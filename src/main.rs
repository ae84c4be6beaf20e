//! Application entry point and thread bootstrapper.

mod input;
mod logic;
mod models;
mod render;
mod shared;
mod state;
mod system;

use crate::models::SettingsState;
use crate::models::settings::SETTINGS_PATH;
use crate::system::bus::SystemBus;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("MAIN: Booting Guess The Word...");

    let settings = SettingsState::load();
    if !Path::new(SETTINGS_PATH).exists()
        && let Err(e) = settings.save()
    {
        log::warn!("MAIN: Could not write default settings: {}", e);
    }

    let bus = SystemBus::new();

    let stdin_bus = bus.clone();
    let input_bus = bus.clone();
    let logic_bus = bus.clone();
    let render_bus = bus.clone();

    let input_manager = input::manager::InputManager::new(&settings.keybinds);
    let keys = settings.keybinds.clone();

    input::start_stdin_reader(stdin_bus);
    input::start_thread(input_bus, input_manager);
    let logic = logic::start_thread(logic_bus, settings);

    render::app::App::run(render_bus, keys);

    if logic.join().is_err() {
        log::error!("MAIN: Logic thread panicked");
    }
}
