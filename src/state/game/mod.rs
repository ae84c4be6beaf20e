//! Core state for a running round.
//!
//! The `GameState` owns everything a round needs:
//! - The shuffled word queue and the word on screen
//! - The score
//! - The countdown and the one-shot "finished" event
//!
//! It knows nothing about screens. The screen glue lives in `actions`.

mod snapshot;

pub mod actions;

use crate::models::{Countdown, CountdownEvent, DONE, GameConfig, WordQueue, format_elapsed_time};
use crate::state::OneShotEvent;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

pub struct GameState {
    /// Word currently shown to the player.
    word: String,
    /// Correct guesses minus skips. Saturates at the `i32` limits.
    score: i32,
    /// Words left for this round.
    word_queue: WordQueue,
    countdown: Countdown,
    /// Seconds left as of the last tick.
    current_time: u64,
    /// Raised when the countdown reaches zero.
    event_game_finish: OneShotEvent,
}

impl GameState {
    /// Starts a round with the default 60 second countdown.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Starts a round with custom timer parameters.
    pub fn with_config(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Starts a round shuffling with the given generator.
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut state = Self {
            word: String::new(),
            score: 0,
            word_queue: WordQueue::new(rng),
            countdown: Countdown::start(config.countdown, config.tick),
            current_time: config.countdown.as_secs(),
            event_game_finish: OneShotEvent::new(),
        };
        state.next_word();
        log::info!(
            "GAME: GameState created ({}s countdown)",
            config.countdown.as_secs()
        );
        state
    }

    #[cfg(test)]
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Seconds left as of the last tick.
    #[cfg(test)]
    pub fn current_time(&self) -> u64 {
        self.current_time
    }

    /// Time left formatted for display.
    pub fn current_time_string(&self) -> String {
        format_elapsed_time(self.current_time)
    }

    /// Whether the game has finished and the finish was not acknowledged yet.
    pub fn event_game_finish(&self) -> bool {
        self.event_game_finish.peek()
    }

    /// Whether the countdown is still running.
    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// The player's word was guessed.
    pub fn on_correct(&mut self) {
        self.score = self.score.saturating_add(1);
        self.next_word();
    }

    /// The player passed on the word.
    pub fn on_skip(&mut self) {
        self.score = self.score.saturating_sub(1);
        self.next_word();
    }

    /// Clears the finished event after the observer has left the game screen.
    pub fn on_finished_acknowledged(&mut self) {
        self.event_game_finish.acknowledge();
    }

    /// Feeds elapsed time to the countdown and applies the ticks that fired.
    pub fn update(&mut self, dt: Duration) {
        for event in self.countdown.advance(dt) {
            match event {
                CountdownEvent::Tick { remaining } => {
                    self.current_time = remaining.as_secs();
                }
                CountdownEvent::Finished => {
                    self.current_time = DONE;
                    self.on_game_finish();
                }
            }
        }
    }

    /// Stops the countdown. Nothing ticks or fires afterwards.
    pub fn teardown(&mut self) {
        if self.countdown.is_cancelled() {
            return;
        }
        self.countdown.cancel();
        log::info!("GAME: GameState destroyed (final score {})", self.score);
    }

    fn on_game_finish(&mut self) {
        log::info!("GAME: Time is up, score {}", self.score);
        self.event_game_finish.raise();
    }

    fn next_word(&mut self) {
        self.word = self.word_queue.next_word();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GameState {
    fn drop(&mut self) {
        self.teardown();
    }
}
