//! Trait implementations for ScoreState.

use super::ScoreState;
use crate::input::events::GameAction;
use crate::shared::snapshot::ScoreSnapshot;
use crate::state::traits::{HandleAction, Snapshot, Transition, Update};
use std::time::Duration;

impl Snapshot for ScoreState {
    type Output = ScoreSnapshot;

    fn create_snapshot(&self) -> Self::Output {
        ScoreSnapshot { score: self.score() }
    }
}

// The score screen is static apart from watching the restart request.
impl Update for ScoreState {
    fn update(&mut self, _dt: Duration) -> Option<Transition> {
        if !self.event_play_again() {
            return None;
        }
        self.on_play_again_acknowledged();
        Some(Transition::ToGame)
    }
}

impl HandleAction for ScoreState {
    fn handle_action(&mut self, action: &GameAction) -> Transition {
        match action {
            GameAction::PlayAgain => {
                self.on_play_again();
                Transition::None
            }
            GameAction::Quit => Transition::Exit,
            GameAction::Correct | GameAction::Skip => Transition::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: Duration = Duration::from_millis(16);

    #[test]
    fn test_play_again_restarts_once() {
        let mut state = ScoreState::new(5);
        assert_eq!(state.update(DT), None);

        assert_eq!(state.handle_action(&GameAction::PlayAgain), Transition::None);
        assert_eq!(state.update(DT), Some(Transition::ToGame));
        assert!(!state.event_play_again());
        assert_eq!(state.update(DT), None);
    }

    #[test]
    fn test_game_buttons_ignored() {
        let mut state = ScoreState::new(5);
        assert_eq!(state.handle_action(&GameAction::Correct), Transition::None);
        assert_eq!(state.handle_action(&GameAction::Skip), Transition::None);
        assert_eq!(state.create_snapshot(), ScoreSnapshot { score: 5 });
    }

    #[test]
    fn test_quit_exits() {
        let mut state = ScoreState::new(5);
        assert_eq!(state.handle_action(&GameAction::Quit), Transition::Exit);
    }
}
