//! Debounce gate for suggestion dispatch
//!
//! The event loop is single-threaded, so instead of owning a timer thread the
//! debouncer records a deadline and hands back the most recent arguments once
//! the loop polls it after that deadline. Rescheduling replaces both the
//! pending arguments and the deadline, so a burst of calls inside the window
//! yields exactly one delivery.

use std::time::{Duration, Instant};

/// Default delay between the last keystroke and the suggestion fetch
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

#[derive(Debug)]
struct Pending<T> {
    args: T,
    deadline: Instant,
}

/// Collapses bursts of triggers into one delayed delivery
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel whatever is pending and arm a fresh deadline for `args`
    pub fn schedule(&mut self, args: T) {
        self.schedule_at(args, Instant::now());
    }

    pub fn schedule_at(&mut self, args: T, now: Instant) {
        self.pending = Some(Pending {
            args,
            deadline: now + self.delay,
        });
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending arguments if the deadline has passed
    pub fn take_ready(&mut self) -> Option<T> {
        self.take_ready_at(Instant::now())
    }

    pub fn take_ready_at(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.args),
            _ => None,
        }
    }

    /// How long the event loop may block before the pending delivery is due
    pub fn time_until_ready(&self) -> Option<Duration> {
        self.time_until_ready_at(Instant::now())
    }

    pub fn time_until_ready_at(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
