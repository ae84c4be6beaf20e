//! Fixed-interval countdown timer driven by the logic loop.
//!
//! The countdown does not own a clock. The caller advances it with the elapsed
//! time of each update step, and it reports the ticks and the final expiry that
//! fell inside that step. Once finished or cancelled it never reports anything
//! again.

use std::time::Duration;

/// Lifecycle of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    /// Still counting down.
    Running,
    /// Reached zero.
    Finished,
    /// Stopped before reaching zero (or torn down afterwards).
    Cancelled,
}

/// Something that happened while advancing the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// One tick interval passed; `remaining` is the time left until zero.
    Tick { remaining: Duration },
    /// The countdown reached zero.
    Finished,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    total: Duration,
    interval: Duration,
    elapsed: Duration,
    next_tick: Duration,
    status: CountdownStatus,
}

impl Countdown {
    /// Starts a countdown of `total`, ticking every `interval`.
    ///
    /// A zero interval is bumped to one millisecond.
    pub fn start(total: Duration, interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            total,
            interval,
            elapsed: Duration::ZERO,
            next_tick: interval,
            status: CountdownStatus::Running,
        }
    }

    /// Advances the countdown by `dt` and returns the events that fired, in order.
    pub fn advance(&mut self, dt: Duration) -> Vec<CountdownEvent> {
        let mut events = Vec::new();
        if self.status != CountdownStatus::Running {
            return events;
        }

        self.elapsed = (self.elapsed + dt).min(self.total);

        while self.next_tick <= self.elapsed && self.next_tick < self.total {
            events.push(CountdownEvent::Tick {
                remaining: self.total - self.next_tick,
            });
            self.next_tick += self.interval;
        }

        if self.elapsed >= self.total {
            self.status = CountdownStatus::Finished;
            events.push(CountdownEvent::Finished);
        }

        events
    }

    /// Stops the countdown. Safe to call any number of times, in any state.
    pub fn cancel(&mut self) {
        self.status = CountdownStatus::Cancelled;
    }

    #[cfg(test)]
    pub fn status(&self) -> CountdownStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == CountdownStatus::Running
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == CountdownStatus::Cancelled
    }

    /// Time left until zero.
    #[cfg(test)]
    pub fn remaining(&self) -> Duration {
        self.total - self.elapsed
    }
}

/// Formats a number of seconds as `MM:SS`, or `H:MM:SS` from one hour up.
pub fn format_elapsed_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
