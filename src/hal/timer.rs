//! Time Source
//!
//! Implements the acquisition core's [`Clock`] seam on embassy-time: a
//! monotonic millisecond tick for timeout deadlines and a busy-wait delay
//! for per-sample settling. The delay blocks the calling context, which is
//! exactly the acquisition model: strictly sequential, one transaction at
//! a time.

use embassy_time::{block_for, Duration, Instant};

use crate::measure::Clock;

/// Monotonic clock backed by the embassy time driver
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a clock handle
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}
