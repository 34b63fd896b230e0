//! Scroll orchestration
//!
//! Advances the visible window one column per display cycle, and tops up
//! the ring with the next message character each time a full character
//! width has scrolled past. The message recycles forever.

use heapless::String;

use crate::font::{self, CHAR_WIDTH};
use crate::frame::FrameBuffer;
use crate::message::{wrap_col, MessageMatrix};
use crate::traits::FrameSink;

/// Milliseconds each column stays lit during a scan pass
pub const COLUMN_DWELL_MS: u64 = 2;

/// Milliseconds each frame is displayed before the window advances
pub const FRAME_DURATION_MS: u64 = 60;

/// Maximum message length in characters
pub const MESSAGE_MAX: usize = 64;

/// Scrolling-text state machine
///
/// Owns the message ring and the three indices that drive it: the window
/// (left edge of the visible frame, +1 per cycle), the tail (next glyph
/// insertion column, +`CHAR_WIDTH` per insertion) and the cursor into the
/// message text (wraps at the end, so playback loops).
pub struct Scroller {
    matrix: MessageMatrix,
    window: usize,
    tail: usize,
    cursor: usize,
    text: String<MESSAGE_MAX>,
}

impl Scroller {
    /// Create a scroller for `text`, truncated to [`MESSAGE_MAX`] characters
    ///
    /// The typeface covers lowercase letters and space; any other character
    /// scrolls past as a blank cell.
    pub fn new(text: &str) -> Self {
        let mut owned = String::new();
        for ch in text.chars() {
            if owned.push(ch).is_err() {
                break;
            }
        }

        Self {
            matrix: MessageMatrix::new(),
            window: 0,
            tail: 0,
            cursor: 0,
            text: owned,
        }
    }

    /// Extract the currently visible frame
    pub fn frame(&self) -> FrameBuffer {
        self.matrix.window(self.window)
    }

    /// Advance the window one column, staging the next message character
    /// when a character-width boundary is crossed
    pub fn advance(&mut self) {
        self.window = wrap_col(self.window + 1);
        if self.window % CHAR_WIDTH == 0 {
            self.stage_next_char();
        }
    }

    /// One display cycle: show the current frame, then advance
    pub fn step<S: FrameSink>(&mut self, sink: &mut S) {
        let frame = self.frame();
        sink.show(&frame, COLUMN_DWELL_MS, FRAME_DURATION_MS);
        self.advance();
    }

    /// Run the marquee forever
    pub fn run<S: FrameSink>(&mut self, sink: &mut S) -> ! {
        loop {
            self.step(sink);
        }
    }

    /// Ring column of the visible frame's left edge
    pub fn window(&self) -> usize {
        self.window
    }

    /// Ring column where the next glyph will be inserted
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Index of the next message character to stage
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Blit the glyph for the character at the cursor into the tail slot
    fn stage_next_char(&mut self) {
        if self.text.is_empty() {
            return;
        }
        if self.cursor >= self.text.len() {
            self.cursor = 0;
        }

        let ch = self.text.as_bytes()[self.cursor] as char;
        // Characters outside the typeface become a blank cell; blitting the
        // fallback still overwrites whatever was staged in the slot before.
        let glyph = font::glyph_for(ch).unwrap_or(&font::BLANK);
        self.matrix.blit_glyph(glyph, self.tail);

        self.cursor += 1;
        self.tail = wrap_col(self.tail + CHAR_WIDTH);
    }
}
