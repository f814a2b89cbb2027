//! Frame timing
//!
//! A thin wrapper over a monotonic clock. The delta reported by
//! [`FrameTimer::tick`] is the raw wall-clock interval since the previous
//! tick, with no smoothing or clamping; callback cost therefore dilates the
//! next reported delta, which is the documented behaviour of the loop.

use std::time::{Duration, Instant};

/// Measures per-frame elapsed time from a monotonic clock.
pub struct FrameTimer {
    last: Instant,
    total: Duration,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Create a timer whose first tick measures from now.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            total: Duration::ZERO,
        }
    }

    /// Return the seconds elapsed since the previous tick (or since
    /// construction for the first tick) and advance the timer.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        self.total += elapsed;
        elapsed.as_secs_f32()
    }

    /// Total seconds accumulated across all ticks.
    pub fn total_secs(&self) -> f32 {
        self.total.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_tick_is_non_negative() {
        let mut timer = FrameTimer::new();
        for _ in 0..10 {
            assert!(timer.tick() >= 0.0);
        }
    }

    #[test]
    fn test_tick_reflects_wall_clock() {
        let mut timer = FrameTimer::new();
        thread::sleep(Duration::from_millis(20));
        let elapsed = timer.tick();
        // Sleep granularity varies; only assert a generous lower bound.
        assert!(elapsed >= 0.010, "elapsed was {elapsed}");
    }

    #[test]
    fn test_total_accumulates() {
        let mut timer = FrameTimer::new();
        thread::sleep(Duration::from_millis(5));
        let first = timer.tick();
        thread::sleep(Duration::from_millis(5));
        let second = timer.tick();
        let total = timer.total_secs();
        assert!(total >= first);
        assert!(total >= second);
        assert!((total - (first + second)).abs() < 1e-3);
    }
}
