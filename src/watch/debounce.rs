use std::time::{Duration, Instant};

/// Trailing-edge debouncer driven by explicit timestamps.
///
/// Every trigger pushes the deadline out by the full window; only the last
/// trigger of a burst fires.
#[derive(Clone, Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
    /// Triggers absorbed into an already pending deadline.
    coalesced: u64,
}

impl Debouncer {
    /// Create an idle debouncer with the given coalescing window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            coalesced: 0,
        }
    }

    /// Configured coalescing window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule (or push back) the pending fire.
    pub fn trigger(&mut self, now: Instant) {
        if self.deadline.is_some() {
            self.coalesced = self.coalesced.saturating_add(1);
        }
        self.deadline = Some(now + self.window);
    }

    /// Return `true` once when the deadline has passed, clearing it.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending fire.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Return `true` while a fire is scheduled.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending fire is due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Number of triggers folded into a pending fire so far.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
#[path = "../../tests/unit/watch/debounce.rs"]
mod tests;
