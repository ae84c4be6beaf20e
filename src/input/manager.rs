use super::events::{GameAction, RawInputEvent};
use crate::models::KeyBindings;
use std::collections::HashMap;

/// Maps typed commands to game actions.
pub struct InputManager {
    bindings: HashMap<String, GameAction>,
}

impl InputManager {
    pub fn new(keybinds: &KeyBindings) -> Self {
        let mut manager = Self {
            bindings: HashMap::new(),
        };
        manager.load_default_bindings();
        manager.reload_keybinds(keybinds);
        manager
    }

    pub fn process(&self, event: RawInputEvent) -> Option<GameAction> {
        let key = normalize(&event.line);
        if key.is_empty() {
            return None;
        }

        let action = self.bindings.get(&key).copied();
        if action.is_none() {
            log::debug!("INPUT: Unknown command {:?}", key);
        }
        action
    }

    /// Replaces the bindings of every action that has a non-empty list in `keybinds`.
    pub fn reload_keybinds(&mut self, keybinds: &KeyBindings) {
        let groups = [
            (GameAction::Correct, &keybinds.correct),
            (GameAction::Skip, &keybinds.skip),
            (GameAction::PlayAgain, &keybinds.play_again),
            (GameAction::Quit, &keybinds.quit),
        ];

        for (action, keys) in groups {
            let parsed: Vec<String> = keys
                .iter()
                .map(|k| normalize(k))
                .filter(|k| !k.is_empty())
                .collect();
            if parsed.is_empty() {
                continue;
            }

            self.bindings.retain(|_, bound| *bound != action);
            for key in parsed {
                if let Some(previous) = self.bindings.insert(key.clone(), action)
                    && previous != action
                {
                    log::warn!(
                        "INPUT: {:?} rebound from {:?} to {:?}",
                        key,
                        previous,
                        action
                    );
                }
            }
        }
    }

    fn load_default_bindings(&mut self) {
        let defaults = KeyBindings::default();
        let groups = [
            (GameAction::Correct, defaults.correct),
            (GameAction::Skip, defaults.skip),
            (GameAction::PlayAgain, defaults.play_again),
            (GameAction::Quit, defaults.quit),
        ];
        for (action, keys) in groups {
            for key in keys {
                self.bindings.insert(key, action);
            }
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(manager: &InputManager, line: &str) -> Option<GameAction> {
        manager.process(RawInputEvent::new(line))
    }

    #[test]
    fn test_default_bindings() {
        let manager = InputManager::new(&KeyBindings::default());
        assert_eq!(press(&manager, "c"), Some(GameAction::Correct));
        assert_eq!(press(&manager, "skip"), Some(GameAction::Skip));
        assert_eq!(press(&manager, "p"), Some(GameAction::PlayAgain));
        assert_eq!(press(&manager, "quit"), Some(GameAction::Quit));
    }

    #[test]
    fn test_input_is_normalized() {
        let manager = InputManager::new(&KeyBindings::default());
        assert_eq!(press(&manager, "  Correct \n"), Some(GameAction::Correct));
        assert_eq!(press(&manager, "S"), Some(GameAction::Skip));
    }

    #[test]
    fn test_unknown_and_blank_lines() {
        let manager = InputManager::new(&KeyBindings::default());
        assert_eq!(press(&manager, "zebra"), None);
        assert_eq!(press(&manager, ""), None);
        assert_eq!(press(&manager, "   "), None);
    }

    #[test]
    fn test_custom_bindings_replace_defaults() {
        let keybinds = KeyBindings {
            correct: vec!["Y".to_string(), "yes".to_string()],
            ..KeyBindings::default()
        };
        let manager = InputManager::new(&keybinds);
        assert_eq!(press(&manager, "y"), Some(GameAction::Correct));
        assert_eq!(press(&manager, "yes"), Some(GameAction::Correct));
        assert_eq!(press(&manager, "c"), None);
        assert_eq!(press(&manager, "s"), Some(GameAction::Skip));
    }

    #[test]
    fn test_empty_list_keeps_defaults() {
        let keybinds = KeyBindings {
            quit: Vec::new(),
            ..KeyBindings::default()
        };
        let manager = InputManager::new(&keybinds);
        assert_eq!(press(&manager, "q"), Some(GameAction::Quit));
    }
}
