pub mod constants;
pub mod countdown;
pub mod settings;
pub mod words;

pub use constants::*;
pub use countdown::{Countdown, CountdownEvent, format_elapsed_time};
pub use settings::{GameConfig, KeyBindings, SettingsState};
pub use words::WordQueue;
