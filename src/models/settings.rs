//! User settings stored in `settings.toml`.

use super::constants::{COUNTDOWN_TIME, COUNTDOWN_TIME_MS, ONE_SECOND, ONE_SECOND_MS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default location of the settings file, relative to the working directory.
pub const SETTINGS_PATH: &str = "settings.toml";

/// Timer parameters for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub countdown: Duration,
    pub tick: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            countdown: COUNTDOWN_TIME,
            tick: ONE_SECOND,
        }
    }
}

/// Words typed at the prompt for each action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub correct: Vec<String>,
    pub skip: Vec<String>,
    pub play_again: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let owned = |keys: &[&str]| -> Vec<String> {
            keys.iter().map(|k| k.to_string()).collect()
        };
        Self {
            correct: owned(&["c", "correct"]),
            skip: owned(&["s", "skip"]),
            play_again: owned(&["p", "play"]),
            quit: owned(&["q", "quit"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsState {
    /// Game length in seconds.
    pub countdown_secs: u64,
    /// Countdown tick interval in milliseconds.
    pub tick_ms: u64,
    pub keybinds: KeyBindings,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            countdown_secs: COUNTDOWN_TIME_MS / 1000,
            tick_ms: ONE_SECOND_MS,
            keybinds: KeyBindings::default(),
        }
    }
}

impl SettingsState {
    /// Loads settings from [`SETTINGS_PATH`], falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_PATH))
    }

    /// Loads settings from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        match load_toml::<SettingsState>(path) {
            Ok(mut settings) => {
                settings.validate();
                log::info!("SETTINGS: Loaded from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!(
                    "SETTINGS: Using defaults, could not load {}: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Writes settings to [`SETTINGS_PATH`].
    pub fn save(&self) -> Result<(), String> {
        self.save_to(Path::new(SETTINGS_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, content).map_err(|e| e.to_string())?;
        log::info!("SETTINGS: Saved to {}", path.display());
        Ok(())
    }

    /// Replaces zero durations with the defaults.
    pub fn validate(&mut self) {
        let defaults = Self::default();
        if self.countdown_secs == 0 {
            log::warn!(
                "SETTINGS: countdown_secs must be at least 1, using {}",
                defaults.countdown_secs
            );
            self.countdown_secs = defaults.countdown_secs;
        }
        if self.tick_ms == 0 {
            log::warn!(
                "SETTINGS: tick_ms must be at least 1, using {}",
                defaults.tick_ms
            );
            self.tick_ms = defaults.tick_ms;
        }
    }

    /// Timer parameters for a new game.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            countdown: Duration::from_secs(self.countdown_secs),
            tick: Duration::from_millis(self.tick_ms),
        }
    }
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    match toml::from_str(&content) {
        Ok(data) => Ok(data),
        Err(e) => {
            log::error!("Failed to parse TOML file {:?}: {}", path, e);
            Err(e.to_string())
        }
    }
}
