//! Snapshot creation for GameState - get_snapshot

use super::GameState;
use crate::shared::snapshot::GameplaySnapshot;

impl GameState {
    /// Creates a snapshot of the current round for rendering.
    pub fn get_snapshot(&self) -> GameplaySnapshot {
        GameplaySnapshot {
            word: self.word.clone(),
            score: self.score,
            time_text: self.current_time_string(),
        }
    }
}
