//! Frame pacing.
//!
//! `FrameClock::tick` blocks until one frame budget has passed since the
//! previous tick. There is no catch-up: a slow frame simply starts the next
//! budget late.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    budget: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self::with_budget(Duration::from_secs(1) / fps.max(1))
    }

    pub fn with_budget(budget: Duration) -> Self {
        Self {
            budget,
            last: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left in the current frame as of `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.budget
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Sleep out the rest of the frame. Returns the time since the previous
    /// tick, sleep included.
    pub fn tick(&mut self) -> Duration {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed
    }
}
