//! Trailing-edge debouncing for high-frequency handlers (scroll, resize).

use std::time::{Duration, Instant};

/// Fires once after triggers stop arriving for `wait`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Record a trigger, pushing the deadline back to `now + wait`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns true exactly once per quiet period, when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}
