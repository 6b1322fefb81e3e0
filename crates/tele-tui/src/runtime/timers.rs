//! Deferred events for the single-threaded loop.
//!
//! The queue never reads the clock itself; callers pass `now`, so tests
//! can drive it with synthetic instants.

use std::time::{Duration, Instant};

use crate::events::UiEvent;

/// What to deliver when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Tick,
    ClearError,
}

impl TimerKind {
    pub fn into_event(self, fired_at: Instant) -> UiEvent {
        match self {
            Self::Tick => UiEvent::Tick { at: fired_at },
            Self::ClearError => UiEvent::ClearError,
        }
    }
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    /// Kept sorted by deadline; insertion order breaks ties.
    pending: Vec<(Instant, TimerKind)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, after: Duration, kind: TimerKind) {
        let deadline = now + after;
        let index = self.pending.partition_point(|(due, _)| *due <= deadline);
        self.pending.insert(index, (deadline, kind));
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.pending.first().map(|(due, _)| *due)
    }

    /// Time until the earliest deadline, zero if already due.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due().map(|due| due.saturating_duration_since(now))
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let split = self.pending.partition_point(|(due, _)| *due <= now);
        self.pending.drain(..split).map(|(_, kind)| kind).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
