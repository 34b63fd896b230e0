//! Rendering trait
//!
//! The scroll orchestrator renders through this seam. The hardware scan
//! driver in `pharos-drivers` implements it; tests substitute a capturing
//! sink so frame contents can be asserted without hardware.

use crate::frame::FrameBuffer;

/// Something that can put a frame in front of the viewer for a while
///
/// `show` blocks for the full `duration_ms`: a multiplexed matrix has to be
/// re-scanned continuously to stay visible, so presenting a frame and
/// holding it are the same operation.
pub trait FrameSink {
    /// Present `frame` for `duration_ms`, dwelling `dwell_ms` on each
    /// column per scan pass
    fn show(&mut self, frame: &FrameBuffer, dwell_ms: u64, duration_ms: u64);
}
