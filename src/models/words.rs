//! The fixed word set and the shuffled queue the game draws from.

use super::constants::WORD_COUNT;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Words available in every round.
pub const WORDS: [&str; WORD_COUNT] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

/// Remaining words for the current round, consumed from the front.
///
/// Whenever a word is requested from an empty queue, the queue is refilled
/// with the full word set in a fresh random order before popping.
pub struct WordQueue {
    words: VecDeque<String>,
    rng: StdRng,
}

impl WordQueue {
    /// Creates a queue holding the full word set, already shuffled.
    pub fn new(rng: StdRng) -> Self {
        let mut queue = Self {
            words: VecDeque::with_capacity(WORD_COUNT),
            rng,
        };
        queue.reset();
        queue
    }

    /// Refills the queue with every word and shuffles it.
    fn reset(&mut self) {
        let mut list: Vec<String> = WORDS.iter().map(|w| w.to_string()).collect();
        list.shuffle(&mut self.rng);
        self.words = list.into();
        log::debug!("GAME: Word list reset ({} words)", self.words.len());
    }

    /// Pops the next word, refilling first if the queue ran dry.
    pub fn next_word(&mut self) -> String {
        if self.words.is_empty() {
            self.reset();
        }
        // The set is non-empty, so the queue always has a front after a reset.
        self.words.pop_front().unwrap_or_default()
    }

    /// Number of words left before the next refill.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> WordQueue {
        WordQueue::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_new_queue_holds_full_set() {
        let queue = seeded(1);
        assert_eq!(queue.len(), WORD_COUNT);

        let words: HashSet<&str> = queue.words.iter().map(String::as_str).collect();
        let expected: HashSet<&str> = WORDS.iter().copied().collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_pops_from_front() {
        let mut queue = seeded(2);
        let front = queue.words.front().cloned();
        assert_eq!(Some(queue.next_word()), front);
        assert_eq!(queue.len(), WORD_COUNT - 1);
    }

    #[test]
    fn test_one_full_pass_yields_each_word_once() {
        let mut queue = seeded(3);
        let drawn: Vec<String> = (0..WORD_COUNT).map(|_| queue.next_word()).collect();
        assert!(queue.is_empty());

        let unique: HashSet<&String> = drawn.iter().collect();
        assert_eq!(unique.len(), WORD_COUNT);
    }

    #[test]
    fn test_refills_when_exhausted() {
        let mut queue = seeded(4);
        for _ in 0..WORD_COUNT {
            queue.next_word();
        }
        assert!(queue.is_empty());

        let word = queue.next_word();
        assert!(!word.is_empty());
        assert!(WORDS.contains(&word.as_str()));
        assert_eq!(queue.len(), WORD_COUNT - 1);
    }

    #[test]
    fn test_never_hands_out_empty_word() {
        let mut queue = seeded(5);
        for _ in 0..(WORD_COUNT * 5 + 3) {
            assert!(!queue.next_word().is_empty());
        }
    }

    #[test]
    fn test_shuffle_changes_order() {
        // Two seeds agreeing on all 21 positions would be astronomically unlikely.
        let a: Vec<String> = seeded(10).words.into_iter().collect();
        let b: Vec<String> = seeded(11).words.into_iter().collect();
        assert_ne!(a, b);
    }
}
