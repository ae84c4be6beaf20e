//! One-shot events with an explicit acknowledge step.
//!
//! Observers call [`OneShotEvent::peek`] as often as they like; the event stays
//! pending until [`OneShotEvent::acknowledge`] is called. An observer that
//! re-attaches still sees an unhandled event but never one already acknowledged.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShotEvent {
    pending: bool,
}

impl OneShotEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the event as pending.
    pub fn raise(&mut self) {
        self.pending = true;
    }

    /// Whether the event is pending. Does not consume it.
    pub fn peek(&self) -> bool {
        self.pending
    }

    /// Clears the event once the observer has handled it.
    pub fn acknowledge(&mut self) {
        self.pending = false;
    }
}
