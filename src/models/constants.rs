//! Timing and word-list constants shared by the game and score screens.

use std::time::Duration;

/// Countdown value once the game is over.
pub const DONE: u64 = 0;

/// Countdown tick interval in milliseconds.
pub const ONE_SECOND_MS: u64 = 1_000;

/// Total game time in milliseconds.
pub const COUNTDOWN_TIME_MS: u64 = 60_000;

/// Number of words in the fixed word set.
pub const WORD_COUNT: usize = 21;

/// Total game time.
pub const COUNTDOWN_TIME: Duration = Duration::from_millis(COUNTDOWN_TIME_MS);

/// Countdown tick interval.
pub const ONE_SECOND: Duration = Duration::from_millis(ONE_SECOND_MS);
