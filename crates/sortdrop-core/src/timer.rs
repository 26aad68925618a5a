//! Deferred success for frame-polled shells.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// One-shot deadline that fires once after being armed.
///
/// Not cancelable: once armed it stays armed until it fires.
#[derive(Debug, Clone, Default)]
pub struct SuccessTimer {
    deadline: Option<Instant>,
    fired: bool,
}

impl SuccessTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer. Ignored if it is already armed or has fired.
    pub fn arm(&mut self, delay: Duration) {
        self.arm_at(Instant::now() + delay);
    }

    /// Arm the timer with an explicit deadline.
    pub fn arm_at(&mut self, deadline: Instant) {
        if self.deadline.is_none() && !self.fired {
            self.deadline = Some(deadline);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the deadline, if armed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Returns true exactly once, the first time it is polled after the deadline.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.fired = true;
                true
            }
            _ => false,
        }
    }
}
