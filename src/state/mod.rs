//! State management module.
//!
//! This module contains the two screen states and the machine that switches
//! between them:
//! - `GameState` - The running word-guessing round
//! - `ScoreState` - The final score screen
//! - `GlobalState` - Owns whichever screen is active
//!
//! Each screen state implements common traits for snapshots, updates, and action handling.

pub mod event;
pub mod game;
pub mod global;
pub mod score;
pub mod traits;

// Re-exports for convenient access
pub use event::OneShotEvent;
pub use game::GameState;
pub use global::GlobalState;
pub use score::{ScoreArgs, ScoreState};
