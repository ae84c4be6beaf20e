//! Application state enum for the state machine.

use crate::state::{GameState, ScoreState};

/// The screen currently shown, driven by `GlobalState`.
pub(super) enum AppState {
    /// A round in progress.
    Game(GameState),
    /// Final score of the last round.
    Score(ScoreState),
}
