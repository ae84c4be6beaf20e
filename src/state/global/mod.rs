//! Global state management for the screen state machine.

mod app_state;

use app_state::AppState;

use crate::input::events::GameAction;
use crate::models::SettingsState;
use crate::shared::snapshot::RenderState;
use crate::state::traits::{HandleAction, Snapshot, Transition, Update};
use crate::state::{GameState, ScoreState};
use std::time::Duration;

/// Owns the active screen and performs the transitions between screens.
pub struct GlobalState {
    current_state: AppState,
    settings: SettingsState,
    exit_requested: bool,
}

impl GlobalState {
    /// Creates the state machine, starting on a fresh game screen.
    pub fn new(settings: SettingsState) -> Self {
        log::info!("LOGIC: Initializing Global State");
        let game = GameState::with_config(settings.game_config());
        Self {
            current_state: AppState::Game(game),
            settings,
            exit_requested: false,
        }
    }

    /// Ticks the active screen and applies any transition it reports.
    pub fn update(&mut self, dt: Duration) {
        let transition = match &mut self.current_state {
            AppState::Game(game) => Update::update(game, dt),
            AppState::Score(score) => Update::update(score, dt),
        };

        if let Some(transition) = transition {
            self.apply_transition(transition);
        }
    }

    /// Routes a `GameAction` to the active screen and applies the resulting transition.
    pub fn handle_action(&mut self, action: GameAction) {
        let transition = match &mut self.current_state {
            AppState::Game(game) => game.handle_action(&action),
            AppState::Score(score) => score.handle_action(&action),
        };
        self.apply_transition(transition);
    }

    fn apply_transition(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::ToScore(args) => {
                if let AppState::Game(game) = &mut self.current_state {
                    game.teardown();
                }
                log::info!("LOGIC: Game -> Score");
                self.current_state = AppState::Score(ScoreState::from_args(args));
            }
            Transition::ToGame => {
                log::info!("LOGIC: Score -> Game");
                let game = GameState::with_config(self.settings.game_config());
                self.current_state = AppState::Game(game);
            }
            Transition::Exit => {
                log::info!("LOGIC: Exit requested");
                self.exit_requested = true;
            }
        }
    }

    /// Whether the player asked to quit.
    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }

    /// Stops the active screen's timers before the logic thread exits.
    pub fn shutdown(&mut self) {
        if let AppState::Game(game) = &mut self.current_state {
            game.teardown();
        }
    }

    /// Produces a render-ready snapshot for the render loop.
    pub fn create_snapshot(&self) -> RenderState {
        match &self.current_state {
            AppState::Game(game) => RenderState::InGame(Snapshot::create_snapshot(game)),
            AppState::Score(score) => RenderState::Score(Snapshot::create_snapshot(score)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    fn settings(countdown_secs: u64) -> SettingsState {
        SettingsState {
            countdown_secs,
            ..SettingsState::default()
        }
    }

    fn in_game(state: &GlobalState) -> bool {
        matches!(state.current_state, AppState::Game(_))
    }

    #[test]
    fn test_starts_in_game() {
        let state = GlobalState::new(SettingsState::default());
        assert!(in_game(&state));
        match state.create_snapshot() {
            RenderState::InGame(snapshot) => {
                assert_eq!(snapshot.score, 0);
                assert_eq!(snapshot.time_text, "01:00");
            }
            other => panic!("expected game snapshot, got {:?}", other),
        }
    }

    #[test]
    fn test_finished_game_carries_score() {
        let mut state = GlobalState::new(settings(3));
        state.handle_action(GameAction::Correct);
        state.handle_action(GameAction::Correct);
        state.handle_action(GameAction::Correct);
        state.handle_action(GameAction::Skip);

        state.update(SEC);
        state.update(SEC);
        assert!(in_game(&state));
        state.update(SEC);

        assert_eq!(
            state.create_snapshot(),
            RenderState::Score(crate::shared::snapshot::ScoreSnapshot { score: 2 })
        );
    }

    #[test]
    fn test_play_again_starts_fresh_game() {
        let mut state = GlobalState::new(settings(1));
        state.handle_action(GameAction::Skip);
        state.update(SEC);
        assert!(!in_game(&state));

        state.handle_action(GameAction::PlayAgain);
        // The request is observed on the next update.
        assert!(!in_game(&state));
        state.update(Duration::ZERO);
        assert!(in_game(&state));

        match state.create_snapshot() {
            RenderState::InGame(snapshot) => {
                assert_eq!(snapshot.score, 0);
                assert_eq!(snapshot.time_text, "00:01");
            }
            other => panic!("expected game snapshot, got {:?}", other),
        }
    }

    #[test]
    fn test_score_screen_stays_put_without_request() {
        let mut state = GlobalState::new(settings(1));
        state.update(SEC);
        for _ in 0..5 {
            state.update(SEC);
        }
        assert!(!in_game(&state));
        assert_eq!(
            state.create_snapshot(),
            RenderState::Score(crate::shared::snapshot::ScoreSnapshot { score: 0 })
        );
    }

    #[test]
    fn test_quit_from_either_screen() {
        let mut state = GlobalState::new(settings(1));
        state.handle_action(GameAction::Quit);
        assert!(state.should_exit());

        let mut state = GlobalState::new(settings(1));
        state.update(SEC);
        assert!(!state.should_exit());
        state.handle_action(GameAction::Quit);
        assert!(state.should_exit());
    }

    #[test]
    fn test_shutdown_stops_countdown() {
        let mut state = GlobalState::new(settings(2));
        state.shutdown();
        state.update(Duration::from_secs(5));
        assert!(in_game(&state));
        match state.create_snapshot() {
            RenderState::InGame(snapshot) => assert_eq!(snapshot.time_text, "00:02"),
            other => panic!("expected game snapshot, got {:?}", other),
        }
    }
}
