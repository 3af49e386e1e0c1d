//! Quiescence-window debouncer for text-change events
//!
//! Each trigger records the latest `(text, cursor)` pair and restarts the
//! window; the pending arguments are released only once no trigger has
//! arrived for a full window. All methods take an explicit `Instant` variant
//! so tests can drive time deterministically.

use std::time::{Duration, Instant};

/// Collapses bursts of triggers into a single delayed evaluation
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    armed: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    text: String,
    cursor: usize,
    armed_at: Instant,
}

impl Debouncer {
    /// Create a debouncer with the given quiescence window
    pub fn new(window_ms: u64) -> Self {
        Self {
            window: Duration::from_millis(window_ms),
            armed: None,
        }
    }

    /// Record a trigger at the current time
    pub fn trigger(&mut self, text: String, cursor: usize) {
        self.trigger_at(text, cursor, Instant::now());
    }

    /// Record a trigger at `now`, replacing any pending arguments and
    /// restarting the window
    pub fn trigger_at(&mut self, text: String, cursor: usize, now: Instant) {
        self.armed = Some(Pending {
            text,
            cursor,
            armed_at: now,
        });
    }

    /// Release the pending arguments if the window has elapsed at `now`
    ///
    /// Returns `None` while disarmed or still within the window. Firing
    /// disarms the debouncer until the next trigger.
    pub fn fire(&mut self, now: Instant) -> Option<(String, usize)> {
        let elapsed = self
            .armed
            .as_ref()
            .map(|pending| now.saturating_duration_since(pending.armed_at))?;
        if elapsed < self.window {
            return None;
        }
        self.armed.take().map(|pending| (pending.text, pending.cursor))
    }

    /// Whether a trigger is waiting for the window to elapse
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Drop any pending trigger without evaluating it
    pub fn disarm(&mut self) {
        self.armed = None;
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
