//! Multiplexed matrix scan driver
//!
//! Drives an 8x8 LED matrix one column at a time. Each scan pass walks the
//! columns left to right: the row lines are loaded with that column's pixel
//! pattern, the column select line is asserted for the dwell interval, then
//! released before the next column moves in. Repeated fast enough, the
//! passes fuse into a steady image through persistence of vision.

use pharos_core::frame::{FrameBuffer, COLS, ROWS};
use pharos_core::traits::FrameSink;
use pharos_hal::{MonotonicClock, OutputPin};

/// Multiplexed scan driver owning the matrix lines
///
/// Exclusive owner of the row and column pins; nothing else may toggle
/// them while a scan is in flight. Timing is paced by polling the clock,
/// never by sleeping, since the lines are toggled inside the interval.
pub struct ScanDriver<P, C> {
    rows: [P; ROWS],
    cols: [P; COLS],
    clock: C,
}

impl<P: OutputPin, C: MonotonicClock> ScanDriver<P, C> {
    /// Create a driver from configured output lines
    ///
    /// `rows[r]` drives matrix row `r` (top to bottom) and `cols[c]` the
    /// column select `c` (left to right). All lines should start low so the
    /// matrix is dark until the first pass.
    pub fn new(rows: [P; ROWS], cols: [P; COLS], clock: C) -> Self {
        Self { rows, cols, clock }
    }

    /// Drive every line low, blanking the display
    pub fn blank(&mut self) {
        for line in self.rows.iter_mut().chain(self.cols.iter_mut()) {
            line.set_low();
        }
    }

    /// One left-to-right sweep over the columns
    fn scan_pass(&mut self, frame: &FrameBuffer, dwell_ms: u64) {
        for col in 0..COLS {
            for (row, line) in self.rows.iter_mut().enumerate() {
                line.set_state(frame.pixel(row, col));
            }

            self.cols[col].set_high();
            let lit_at = self.clock.now_ms();
            while self.clock.elapsed_since(lit_at) < dwell_ms {
                core::hint::spin_loop();
            }
            self.cols[col].set_low();
        }
    }
}

impl<P: OutputPin, C: MonotonicClock> FrameSink for ScanDriver<P, C> {
    fn show(&mut self, frame: &FrameBuffer, dwell_ms: u64, duration_ms: u64) {
        let start = self.clock.now_ms();
        while self.clock.elapsed_since(start) < duration_ms {
            self.scan_pass(frame, dwell_ms);
        }
    }
}
