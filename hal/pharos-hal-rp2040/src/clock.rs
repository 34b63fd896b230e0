//! Millisecond uptime clock for RP2040
//!
//! Backed by the embassy time driver, which runs off the RP2040 timer
//! peripheral and is monotonic from boot.

use embassy_time::Instant;
use pharos_hal::MonotonicClock;

/// Uptime clock reading `embassy_time::Instant`
#[derive(Clone, Copy, Default)]
pub struct UptimeClock;

impl UptimeClock {
    /// Create a new uptime clock
    pub const fn new() -> Self {
        Self
    }
}

impl MonotonicClock for UptimeClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
