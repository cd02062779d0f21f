//! Frame delta clock.

use std::time::{Duration, Instant};

/// Monotonic per-frame clock: each [`FrameTimer::tick`] returns the delta
/// since the previous tick and folds it into the session total.
#[derive(Debug)]
pub struct FrameTimer {
    last: Instant,
    elapsed: Duration,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the clock and return the delta since the last tick.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.duration_since(self.last);
        self.last = now;
        self.elapsed += delta;
        delta
    }

    /// Total time accumulated across all ticks.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_accumulates_elapsed() {
        let mut timer = FrameTimer::new();
        std::thread::sleep(Duration::from_millis(5));
        let delta = timer.tick();
        assert!(delta >= Duration::from_millis(5));
        assert!(timer.elapsed() >= delta);
    }

    #[test]
    fn elapsed_sums_deltas() {
        let mut timer = FrameTimer::new();
        let a = timer.tick();
        let b = timer.tick();
        assert_eq!(timer.elapsed(), a + b);
    }
}
