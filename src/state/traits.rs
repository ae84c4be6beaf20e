//! Traits for state management.
//!
//! These traits define the common interface for all screen states.

use crate::input::events::GameAction;
use crate::state::ScoreArgs;
use std::time::Duration;

/// Transition result from handling an action or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Stay in current state.
    None,
    /// Start a brand-new game.
    ToGame,
    /// Show the score screen for a finished game.
    ToScore(ScoreArgs),
    /// Exit the application.
    Exit,
}

/// Trait for creating render-ready snapshots.
///
/// Snapshots are immutable captures of state sent to the render loop.
/// They decouple game logic from rendering.
pub trait Snapshot {
    /// The snapshot type produced.
    type Output;

    /// Creates an immutable snapshot for rendering.
    fn create_snapshot(&self) -> Self::Output;
}

/// Trait for per-frame updates.
///
/// Returns an optional transition to another state.
pub trait Update {
    /// Updates the state for one step.
    ///
    /// # Arguments
    /// * `dt` - Time elapsed since the last update.
    ///
    /// # Returns
    /// Optional transition to another state.
    fn update(&mut self, dt: Duration) -> Option<Transition>;
}

/// Trait for handling game actions.
///
/// Each state can handle actions differently and return transitions
/// to other states.
pub trait HandleAction {
    /// Handles a game action and returns any state transition.
    fn handle_action(&mut self, action: &GameAction) -> Transition;
}
