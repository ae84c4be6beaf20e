//! Trait implementations for GameState.
//!
//! This is the game screen's side of the contract: it maps button presses onto
//! the state, watches the finished event and acknowledges it once it has
//! produced the transition to the score screen.

use super::GameState;
use crate::input::events::GameAction;
use crate::shared::snapshot::GameplaySnapshot;
use crate::state::ScoreArgs;
use crate::state::traits::{HandleAction, Snapshot, Transition, Update};
use std::time::Duration;

// GameState implements Snapshot by creating a GameplaySnapshot.
impl Snapshot for GameState {
    type Output = GameplaySnapshot;

    fn create_snapshot(&self) -> Self::Output {
        self.get_snapshot()
    }
}

// GameState needs per-frame updates to drive its countdown.
// When the game is finished, it hands the score over to the score screen.
impl Update for GameState {
    fn update(&mut self, dt: Duration) -> Option<Transition> {
        GameState::update(self, dt);

        if !self.event_game_finish() {
            return None;
        }

        let args = ScoreArgs {
            score: Some(self.score()),
        };
        self.on_finished_acknowledged();
        Some(Transition::ToScore(args))
    }
}

impl HandleAction for GameState {
    fn handle_action(&mut self, action: &GameAction) -> Transition {
        match action {
            GameAction::Correct => {
                self.on_correct();
                Transition::None
            }
            GameAction::Skip => {
                self.on_skip();
                Transition::None
            }
            GameAction::Quit => Transition::Exit,
            GameAction::PlayAgain => Transition::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn short_game(secs: u64) -> GameState {
        let config = GameConfig {
            countdown: Duration::from_secs(secs),
            tick: Duration::from_secs(1),
        };
        GameState::with_rng(config, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_actions_drive_score() {
        let mut state = short_game(60);
        assert_eq!(state.handle_action(&GameAction::Correct), Transition::None);
        assert_eq!(state.handle_action(&GameAction::Correct), Transition::None);
        assert_eq!(state.handle_action(&GameAction::Skip), Transition::None);
        assert_eq!(state.create_snapshot().score, 1);
    }

    #[test]
    fn test_play_again_ignored_in_game() {
        let mut state = short_game(60);
        assert_eq!(state.handle_action(&GameAction::PlayAgain), Transition::None);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_quit_exits() {
        let mut state = short_game(60);
        assert_eq!(state.handle_action(&GameAction::Quit), Transition::Exit);
    }

    #[test]
    fn test_finish_transitions_once_with_score() {
        let mut state = short_game(2);
        state.handle_action(&GameAction::Correct);

        assert_eq!(Update::update(&mut state, Duration::from_secs(1)), None);
        assert_eq!(
            Update::update(&mut state, Duration::from_secs(1)),
            Some(Transition::ToScore(ScoreArgs { score: Some(1) }))
        );
        assert!(!state.event_game_finish());

        // Re-observing after acknowledgement does not fire again.
        assert_eq!(Update::update(&mut state, Duration::from_secs(1)), None);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = short_game(60);
        GameState::update(&mut state, Duration::from_secs(1));
        let snapshot = state.create_snapshot();
        assert_eq!(snapshot.word, state.word());
        assert_eq!(snapshot.time_text, "00:59");
    }
}
