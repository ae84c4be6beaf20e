//! Render snapshots for inter-thread communication.
//!
//! Snapshots are immutable captures of screen state sent from the logic thread
//! to the render loop. This decouples game logic from rendering.

/// High-level render state representing the current screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RenderState {
    /// Initial empty state.
    #[default]
    Empty,
    /// A round in progress.
    InGame(GameplaySnapshot),
    /// Final score screen.
    Score(ScoreSnapshot),
}

/// Snapshot of a running round for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameplaySnapshot {
    /// Word to act out.
    pub word: String,
    /// Current score.
    pub score: i32,
    /// Seconds left formatted as `MM:SS`.
    pub time_text: String,
}

/// Snapshot of the score screen for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreSnapshot {
    /// Final score of the last round.
    pub score: i32,
}
