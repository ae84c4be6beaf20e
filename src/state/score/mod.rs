//! Final score screen state.

pub mod actions;

use crate::state::OneShotEvent;

/// Arguments carried from the game screen to the score screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreArgs {
    /// Final score, or `None` if the game screen had none to give.
    pub score: Option<i32>,
}

/// Holds the final score for display and the "play again" request.
#[derive(Debug, Clone)]
pub struct ScoreState {
    score: i32,
    event_play_again: OneShotEvent,
}

impl ScoreState {
    pub fn new(final_score: i32) -> Self {
        log::info!("SCORE: Final score is {}", final_score);
        Self {
            score: final_score,
            event_play_again: OneShotEvent::new(),
        }
    }

    /// Builds the score screen from navigation arguments. A missing score counts as 0.
    pub fn from_args(args: ScoreArgs) -> Self {
        Self::new(args.score.unwrap_or(0))
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Whether a restart was requested and not acknowledged yet.
    pub fn event_play_again(&self) -> bool {
        self.event_play_again.peek()
    }

    pub fn on_play_again(&mut self) {
        self.event_play_again.raise();
    }

    /// Clears the restart request after the new game has been started.
    pub fn on_play_again_acknowledged(&mut self) {
        self.event_play_again.acknowledge();
    }
}
